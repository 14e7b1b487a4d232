//! Configuration system (layered: code > env > config file > defaults).

pub mod file;

pub use file::{default_config_path, FileConfig, CONFIG_PATH_ENV};

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::models::GoogleModel;
use crate::types::GenerationSettings;

/// Environment variables consulted for the API key, lowest precedence first.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];
/// Environment variable overriding the Gemini endpoint.
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";
/// Environment variable overriding the model.
pub const MODEL_ENV: &str = "FILMI_MODEL";

/// Resolved configuration for filmi.
///
/// Resolution order, highest first:
/// 1. Explicit setters (CLI flags)
/// 2. Environment variables (`.env` is loaded first if present)
/// 3. The TOML config file
/// 4. Built-in defaults
#[derive(Clone, Default)]
pub struct FilmiConfig {
    api_key: Option<String>,
    base_url: Option<String>,
    model: GoogleModel,
    generation: GenerationSettings,
    source: Option<PathBuf>,
}

impl fmt::Debug for FilmiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilmiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| ".."))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("generation", &self.generation)
            .field("source", &self.source)
            .finish()
    }
}

impl FilmiConfig {
    /// Built-in defaults only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every layer: `.env`, the default config file, then the environment.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = match default_config_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::new(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Defaults overlaid with the given config file, if it exists.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut config = Self::new();
        if let Some(file) = FileConfig::load(path)? {
            debug!(path = %path.display(), "loaded config file");
            config.apply_file(&file);
            config.source = Some(path.to_path_buf());
        }
        Ok(config)
    }

    /// Defaults overlaid with environment variables.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let mut config = Self::new();
        config.apply_env();
        config
    }

    /// Overlay values from a parsed config file.
    pub fn apply_file(&mut self, file: &FileConfig) {
        if let Some(key) = file.resolve_api_key() {
            self.api_key = Some(key);
        }
        if let Some(url) = file.base_url.as_ref().filter(|u| !u.is_empty()) {
            self.base_url = Some(url.clone());
        }
        if let Some(model) = file.model.as_ref().filter(|m| !m.is_empty()) {
            self.model = GoogleModel::from(model.clone());
        }
        self.generation = self.generation.merged_with(&file.generation);
    }

    /// Overlay values from the process environment. Empty values are ignored.
    pub fn apply_env(&mut self) {
        for var in API_KEY_ENV_VARS {
            if let Some(key) = non_empty_env(var) {
                self.api_key = Some(key);
            }
        }
        if let Some(url) = non_empty_env(BASE_URL_ENV) {
            self.base_url = Some(url);
        }
        if let Some(model) = non_empty_env(MODEL_ENV) {
            self.model = GoogleModel::from(model);
        }
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = Some(key.into());
    }

    pub fn api_key(&self) -> Option<String> {
        self.api_key.clone()
    }

    /// The key with all but its last four characters hidden.
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| {
            let chars: Vec<char> = key.chars().collect();
            if chars.len() <= 4 {
                "****".to_string()
            } else {
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("****{tail}")
            }
        })
    }

    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = Some(url.into());
    }

    pub fn base_url(&self) -> Option<String> {
        self.base_url.clone()
    }

    pub fn set_model(&mut self, model: GoogleModel) {
        self.model = model;
    }

    pub fn model(&self) -> GoogleModel {
        self.model.clone()
    }

    /// Overlay generation settings; set fields in `settings` win.
    pub fn merge_generation(&mut self, settings: &GenerationSettings) {
        self.generation = self.generation.merged_with(settings);
    }

    pub fn generation(&self) -> &GenerationSettings {
        &self.generation
    }

    /// Config file that contributed to this config, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn non_empty_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}
