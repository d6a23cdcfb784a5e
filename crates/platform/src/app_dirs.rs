//! Per-app directory resolution
//!
//! The hosting platform guarantees these directories are materialized before
//! the app runs. Resolution happens once at construction; every query after
//! that is a cheap, idempotent read of a process-scoped value, so repeated
//! queries for the same directory always return the same path.

use serde::Serialize;
use std::path::{Path, PathBuf};
use xiangqi_core::config::ConfigSchema;
use xiangqi_core::error::{Error, Result};

/// Override for the native-library directory
pub const ENV_NATIVE_LIB_DIR: &str = "XIANGQI_NATIVE_LIB_DIR";
/// Override for the code-cache directory
pub const ENV_CODE_CACHE_DIR: &str = "XIANGQI_CODE_CACHE_DIR";
/// Override for the files directory
pub const ENV_FILES_DIR: &str = "XIANGQI_FILES_DIR";

/// The three per-app directories, resolved and absolute.
///
/// Per directory, the first source that yields a value wins:
///
/// 1. the `[dirs]` table of the configuration file
/// 2. the `XIANGQI_*` environment variable
/// 3. the platform default
///
/// Platform defaults: the files directory lives under the platform data
/// directory, the code-cache directory under the platform cache directory
/// (both namespaced by bundle id), and the native-library directory is the
/// directory of the running executable, where the app's bundled native
/// libraries are installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    native_library_dir: PathBuf,
    code_cache_dir: PathBuf,
    files_dir: PathBuf,
}

impl AppDirs {
    /// Resolve the app directories for the given configuration.
    ///
    /// Creates the writable directories (files, code cache) if absent; the
    /// native-library directory is read-only and only resolved. Fails if a
    /// platform base directory cannot be determined or an override is not
    /// an absolute path.
    pub fn detect(config: &ConfigSchema) -> Result<Self> {
        let bundle_id = &config.general.bundle_id;

        let native_library_dir = resolve_dir(
            "native_library_dir",
            config.dirs.native_library_dir.as_deref(),
            ENV_NATIVE_LIB_DIR,
            default_native_library_dir,
        )?;
        let code_cache_dir = resolve_dir(
            "code_cache_dir",
            config.dirs.code_cache_dir.as_deref(),
            ENV_CODE_CACHE_DIR,
            || default_code_cache_dir(bundle_id),
        )?;
        let files_dir = resolve_dir(
            "files_dir",
            config.dirs.files_dir.as_deref(),
            ENV_FILES_DIR,
            || default_files_dir(bundle_id),
        )?;

        ensure_dir_exists(&code_cache_dir)?;
        ensure_dir_exists(&files_dir)?;

        tracing::info!(
            native_library_dir = %native_library_dir.display(),
            code_cache_dir = %code_cache_dir.display(),
            files_dir = %files_dir.display(),
            "resolved app directories"
        );

        Ok(Self {
            native_library_dir,
            code_cache_dir,
            files_dir,
        })
    }

    /// Where the app's bundled native libraries are installed (read-only)
    pub fn native_library_dir(&self) -> &Path {
        &self.native_library_dir
    }

    /// Directory for runtime-produced executable artifacts. On recent
    /// platform versions this location carries looser execution
    /// restrictions than the general data directory.
    pub fn code_cache_dir(&self) -> &Path {
        &self.code_cache_dir
    }

    /// Private persistent storage directory
    pub fn files_dir(&self) -> &Path {
        &self.files_dir
    }

    /// Snapshot of the resolved directories for JSON output
    pub fn report(&self) -> DirsReport {
        DirsReport {
            native_library_dir: self.native_library_dir.to_string_lossy().into_owned(),
            code_cache_dir: self.code_cache_dir.to_string_lossy().into_owned(),
            files_dir: self.files_dir.to_string_lossy().into_owned(),
        }
    }
}

/// Serializable snapshot of the resolved directories
#[derive(Debug, Clone, Serialize)]
pub struct DirsReport {
    /// Resolved native-library directory
    pub native_library_dir: String,
    /// Resolved code-cache directory
    pub code_cache_dir: String,
    /// Resolved files directory
    pub files_dir: String,
}

/// Resolve one directory: config override, then env var, then default.
fn resolve_dir(
    field: &str,
    config_override: Option<&Path>,
    env_var: &str,
    default: impl FnOnce() -> Result<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = config_override {
        return require_absolute(field, path.to_path_buf());
    }

    if let Some(value) = std::env::var_os(env_var) {
        return require_absolute(field, PathBuf::from(value));
    }

    default()
}

fn require_absolute(field: &str, path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path)
    } else {
        Err(
            Error::invalid_config_value(field, format!("`{}` is not absolute", path.display()))
                .with_suggestion("Directory overrides must be absolute paths"),
        )
    }
}

fn default_native_library_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| Error::executable_dir_unavailable().with_source(e))?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(Error::executable_dir_unavailable)
}

fn default_code_cache_dir(bundle_id: &str) -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|base| base.join(bundle_id).join("code_cache"))
        .ok_or_else(Error::cache_dir_unavailable)
}

fn default_files_dir(bundle_id: &str) -> Result<PathBuf> {
    dirs::data_dir()
        .map(|base| base.join(bundle_id).join("files"))
        .ok_or_else(Error::data_dir_unavailable)
}

fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .map_err(|e| Error::io(format!("Failed to create {}: {}", path.display(), e)))?;
    }
    Ok(())
}
