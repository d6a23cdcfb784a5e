//! Configuration loading and schema definitions
//!
//! Shared configuration types for the bridge and its host binary.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
