//! Configuration loading and management for the salary engine.
//!
//! The engine ships a default salary structure; deployments can override it
//! through a YAML file loaded at service start.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/salary.yaml").unwrap();
//! println!("Default PF rate: {}", config.default_structure().pf_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::SalaryConfig;
