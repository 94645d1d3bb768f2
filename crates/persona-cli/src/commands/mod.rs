//! CLI command implementations

pub mod analyze;
pub mod personas;
pub mod tables;
