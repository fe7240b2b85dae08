//! Demo code analysis: simulated findings, a bounded persisted history,
//! dashboard aggregates and JSON/CSV/text exports.

pub mod structs;
pub mod services;
pub mod helpers;
pub mod enums;
pub mod errors;
pub mod logger;
pub mod config;
pub mod traits;
pub mod workers;
