//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod local;

pub use local::{clear_dir_except, copy_dir_contents, LocalFs};
