//! Configuration schema definitions
//!
//! All fields are optional in the file; defaults describe the stock app.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default name of the engine method channel. The UI layer binds the client
/// side of the channel under the same name; the two must match exactly.
pub const DEFAULT_ENGINE_CHANNEL: &str = "com.xiangqi.app/engine";

/// Default bundle identifier, used to derive the per-app directories.
pub const DEFAULT_BUNDLE_ID: &str = "com.xiangqi.app";

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// General application identity
    #[serde(default)]
    pub general: GeneralConfig,

    /// Method channel names
    #[serde(default)]
    pub channel: ChannelConfig,

    /// App directory overrides
    #[serde(default)]
    pub dirs: DirsConfig,
}

/// General application identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Application display name
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Bundle identifier; the per-app directories live under this name
    #[serde(default = "default_bundle_id")]
    pub bundle_id: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            bundle_id: default_bundle_id(),
        }
    }
}

fn default_app_name() -> String {
    "Xiangqi".to_string()
}

fn default_bundle_id() -> String {
    DEFAULT_BUNDLE_ID.to_string()
}

/// Method channel names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Name of the engine channel the path-query responder binds to
    #[serde(default = "default_engine_channel")]
    pub engine: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            engine: default_engine_channel(),
        }
    }
}

fn default_engine_channel() -> String {
    DEFAULT_ENGINE_CHANNEL.to_string()
}

/// App directory overrides
///
/// Absent fields fall back to the `XIANGQI_*` environment variables and then
/// to the platform defaults. Values must be absolute paths.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DirsConfig {
    /// Where the app's bundled native libraries are installed
    #[serde(default)]
    pub native_library_dir: Option<PathBuf>,

    /// Directory for runtime-produced executable artifacts
    #[serde(default)]
    pub code_cache_dir: Option<PathBuf>,

    /// Private persistent storage directory
    #[serde(default)]
    pub files_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_defaults() {
        let schema = ConfigSchema::default();
        assert_eq!(schema.general.app_name, "Xiangqi");
        assert_eq!(schema.general.bundle_id, DEFAULT_BUNDLE_ID);
        assert_eq!(schema.channel.engine, DEFAULT_ENGINE_CHANNEL);
        assert!(schema.dirs.files_dir.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [dirs]
            files_dir = "/var/lib/xiangqi"
            "#,
        )
        .unwrap();

        assert_eq!(schema.channel.engine, DEFAULT_ENGINE_CHANNEL);
        assert_eq!(
            schema.dirs.files_dir.as_deref(),
            Some(std::path::Path::new("/var/lib/xiangqi"))
        );
        assert!(schema.dirs.code_cache_dir.is_none());
    }
}
