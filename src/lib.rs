// ABOUTME: Library root for dockconv - translates container specs into runtime configs.
// ABOUTME: The CLI binary is in main.rs.

pub mod convert;
pub mod error;
pub mod request;
pub mod runtime;
pub mod spec;
pub mod types;

pub use convert::{RuntimeConfigs, to_runtime_configs};
