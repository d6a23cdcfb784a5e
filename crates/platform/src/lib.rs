//! App directory resolution and the engine path-query responder
//!
//! This crate provides the platform half of the engine channel:
//!
//! - [`AppDirs`]: resolves the per-app directories (native libraries, code
//!   cache, private files) from configuration, environment variables, or
//!   platform defaults
//! - [`PathQueryResponder`]: answers the engine channel's path queries,
//!   returning one absolute path per recognized method name and
//!   `NotImplemented` for everything else

#![warn(missing_docs)]
#![warn(clippy::all)]

mod app_dirs;
mod responder;

pub use app_dirs::{
    AppDirs, DirsReport, ENV_CODE_CACHE_DIR, ENV_FILES_DIR, ENV_NATIVE_LIB_DIR,
};
pub use responder::{PathQuery, PathQueryResponder};
