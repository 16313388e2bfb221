//! Configuration loading and management for the analytics engine.
//!
//! This module loads the engine configuration from YAML: the raw row column
//! keys, accepted date formats, the default timeline period and the tenure
//! histogram buckets.
//!
//! # Example
//!
//! ```no_run
//! use turnover_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Default period: {:?}", config.config().default_period);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ColumnNames, EngineConfig};
