//! Tests for session files, reports and the command-line front end

pub mod configuration;
pub mod error;
pub mod visualization;
