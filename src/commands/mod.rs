pub mod deploy;
pub mod deployers;
