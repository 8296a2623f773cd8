pub mod config;
pub mod error;
pub mod types;

pub use config::CompressorConfig;
pub use error::{Result, RfError};
pub use types::{Dataset, Predicate, Record, RuleStats, Value};
