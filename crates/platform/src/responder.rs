//! The engine channel's path-query responder

use crate::app_dirs::AppDirs;
use xiangqi_channel::{MethodCall, MethodCallHandler, Outcome};

/// The closed set of queries the engine channel answers.
///
/// The method names are the wire contract with the UI layer and must match
/// byte for byte; parsing does no case folding or trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathQuery {
    /// `getNativeLibraryDir`
    NativeLibraryDir,
    /// `getCodeCacheDir`
    CodeCacheDir,
    /// `getFilesDir`
    FilesDir,
}

impl PathQuery {
    /// Every supported query, in wire order
    pub const ALL: [PathQuery; 3] = [
        PathQuery::NativeLibraryDir,
        PathQuery::CodeCacheDir,
        PathQuery::FilesDir,
    ];

    /// Parse a wire method name into a query. Anything outside the
    /// supported set yields `None`.
    pub fn parse(method: &str) -> Option<Self> {
        match method {
            "getNativeLibraryDir" => Some(PathQuery::NativeLibraryDir),
            "getCodeCacheDir" => Some(PathQuery::CodeCacheDir),
            "getFilesDir" => Some(PathQuery::FilesDir),
            _ => None,
        }
    }

    /// The wire method name of this query
    pub fn method_name(self) -> &'static str {
        match self {
            PathQuery::NativeLibraryDir => "getNativeLibraryDir",
            PathQuery::CodeCacheDir => "getCodeCacheDir",
            PathQuery::FilesDir => "getFilesDir",
        }
    }
}

/// Answers path queries on the engine channel.
///
/// Stateless request/response: each call is matched against the closed
/// [`PathQuery`] set and answered with the corresponding resolved directory,
/// or with `NotImplemented` for any unrecognized name. No side effects, no
/// retries, no error arm: the directories were resolved and materialized
/// when [`AppDirs`] was constructed, so every recognized query succeeds.
pub struct PathQueryResponder {
    dirs: AppDirs,
}

impl PathQueryResponder {
    /// Create a responder over the resolved app directories
    pub fn new(dirs: AppDirs) -> Self {
        Self { dirs }
    }

    /// The directories this responder answers from
    pub fn dirs(&self) -> &AppDirs {
        &self.dirs
    }

    fn answer(&self, query: PathQuery) -> Outcome {
        let path = match query {
            PathQuery::NativeLibraryDir => self.dirs.native_library_dir(),
            PathQuery::CodeCacheDir => self.dirs.code_cache_dir(),
            PathQuery::FilesDir => self.dirs.files_dir(),
        };
        Outcome::success(path.to_string_lossy())
    }
}

impl MethodCallHandler for PathQueryResponder {
    fn handle(&self, call: &MethodCall) -> Outcome {
        match PathQuery::parse(call.method()) {
            Some(query) => self.answer(query),
            None => {
                tracing::debug!(method = %call.method(), "unrecognized method name");
                Outcome::NotImplemented
            }
        }
    }
}
