//! Terminal rendering for the sitedeploy binary.

pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
