//! CLI command implementations

pub mod derive;
pub mod modes;
pub mod scale;

mod reporting;
