//! TOML config file layer.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::types::GenerationSettings;

/// Environment variable that points at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "FILMI_CONFIG";

/// On-disk configuration.
///
/// ```toml
/// model = "gemini-2.5-flash"
/// api_key_env = "MY_GEMINI_KEY"
///
/// [generation]
/// temperature = 0.9
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub api_key: Option<String>,
    /// Name of an environment variable holding the key.
    pub api_key_env: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub generation: GenerationSettings,
}

impl FileConfig {
    /// Parse a config file. A missing file yields `Ok(None)`.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(toml::from_str(&raw)?))
    }

    /// Resolve the key, preferring a literal `api_key` over `api_key_env`.
    ///
    /// An unset `api_key_env` variable yields `None` so later layers can
    /// still supply the key.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.is_empty()) {
            return Some(key.clone());
        }
        let var = self.api_key_env.as_ref()?;
        match std::env::var(var) {
            Ok(key) if !key.is_empty() => Some(key),
            _ => {
                warn!(var = %var, "api_key_env points at an unset variable");
                None
            }
        }
    }
}

/// Config file location: `$FILMI_CONFIG`, else the platform config dir.
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    ProjectDirs::from("", "", "filmi").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilmiError;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let loaded = FileConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn parses_all_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
api_key = "from-file"
base_url = "http://localhost:8080/v1beta"
model = "gemini-2.5-pro"

[generation]
temperature = 0.8
max_tokens = 1024
"#,
        )
        .unwrap();

        let config = FileConfig::load(&path).unwrap().unwrap();
        assert_eq!(config.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.model.as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(config.generation.temperature, Some(0.8));
        assert_eq!(config.generation.max_tokens, Some(1024));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "modle = \"gemini-pro\"\n").unwrap();

        let err = FileConfig::load(&path).unwrap_err();
        assert!(matches!(err, FilmiError::TomlParse(_)));
    }

    #[test]
    fn literal_key_wins_over_env_reference() {
        let config = FileConfig {
            api_key: Some("literal".into()),
            api_key_env: Some("FILMI_TEST_UNSET_VARIABLE".into()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("literal"));
    }

    #[test]
    fn missing_env_reference_resolves_to_no_key() {
        let config = FileConfig {
            api_key_env: Some("FILMI_TEST_DEFINITELY_UNSET_VARIABLE".into()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }
}
