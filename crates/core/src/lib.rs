//! Core utilities for the Xiangqi platform bridge
//!
//! This crate provides shared functionality used by the channel and platform
//! layers and by the host binary:
//!
//! - **Error handling**: structured errors with codes, context, and recovery
//!   suggestions
//! - **Configuration**: TOML-based configuration with defaults
//! - **Health checks**: verify the resolved app directories and environment
//!
//! # Example
//!
//! ```rust,no_run
//! use xiangqi_core::config::Config;
//! use xiangqi_core::health::{HealthChecker, PathCheck};
//!
//! let config = Config::load(None).expect("config");
//!
//! let report = HealthChecker::new()
//!     .add_check(PathCheck::writable("files_dir", "/var/lib/xiangqi"))
//!     .run();
//!
//! if !report.is_healthy() {
//!     eprintln!("Environment issues detected!");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod health;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::health::{HealthChecker, HealthReport, HealthStatus};
}
