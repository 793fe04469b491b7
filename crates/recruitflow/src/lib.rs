//! Domain library for the recruitment progress service.
//!
//! The stage taxonomy is process-wide read-only data: the enums and their
//! lookup tables are built into the binary, not configured at runtime.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
