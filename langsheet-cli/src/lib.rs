//! CLI library for testing purposes

pub mod aggregate;
pub mod config;
pub mod extract;
pub mod formats;

pub use aggregate::{AggregateArgs, execute_aggregate};
pub use config::Config;
pub use extract::{ExtractArgs, execute_extract};
pub use formats::{parse_format, resolve_format};
