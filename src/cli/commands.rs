//! Handlers for the CLI subcommands.

use std::fmt::Write as _;
use std::path::Path;

use crate::config::{default_config_path, FilmiConfig};
use crate::error::{FilmiError, Result};
use crate::generation::JokeGenerator;
use crate::models::GoogleModel;
use crate::provider::create_provider;
use crate::types::{Decade, GenerationSettings, JokeRequest};

use super::GenerateArgs;

/// Resolve configuration, honoring an explicit `--config` path.
pub fn load_config(path: Option<&Path>) -> Result<FilmiConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(FilmiError::Configuration(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            let _ = dotenvy::dotenv();
            let mut config = FilmiConfig::from_file(path)?;
            config.apply_env();
            Ok(config)
        }
        None => FilmiConfig::load(),
    }
}

/// Validate the generate arguments into a request.
pub fn build_request(args: &GenerateArgs) -> Result<JokeRequest> {
    JokeRequest::new(args.topic.as_str(), args.decade, args.count, args.humor)
}

/// Handle `filmi generate`.
pub async fn handle_generate(args: &GenerateArgs, mut config: FilmiConfig) -> Result<()> {
    let request = build_request(args)?;

    if let Some(model) = &args.model {
        config.set_model(GoogleModel::from(model.clone()));
    }
    config.merge_generation(&GenerationSettings {
        temperature: args.temperature,
        max_tokens: args.max_tokens,
        ..Default::default()
    });

    let provider = create_provider(&config)?;
    let generator = JokeGenerator::new(provider).with_settings(config.generation().clone());

    eprintln!("Generating jokes...");
    let output = generator.generate_display(&request).await;
    println!("{output}");
    Ok(())
}

/// Text for `filmi decades`.
pub fn render_decades() -> String {
    Decade::ALL
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text for `filmi config`.
pub fn render_config(config: &FilmiConfig) -> String {
    let mut out = String::new();
    let file = config
        .source()
        .map(|p| p.display().to_string())
        .or_else(|| default_config_path().map(|p| format!("{} (not found)", p.display())))
        .unwrap_or_else(|| "none".to_string());
    let _ = writeln!(out, "config file: {file}");
    let _ = writeln!(out, "model:       {}", config.model());
    let _ = writeln!(
        out,
        "base url:    {}",
        config
            .base_url()
            .unwrap_or_else(|| crate::provider::google::DEFAULT_BASE_URL.to_string())
    );
    let _ = writeln!(
        out,
        "api key:     {}",
        config.masked_api_key().unwrap_or_else(|| "(not set)".to_string())
    );

    let generation = config.generation();
    let fields = [
        ("temperature", generation.temperature.map(|v| v.to_string())),
        ("max_tokens", generation.max_tokens.map(|v| v.to_string())),
        ("top_p", generation.top_p.map(|v| v.to_string())),
        ("top_k", generation.top_k.map(|v| v.to_string())),
    ];
    for (name, value) in fields {
        if let Some(value) = value {
            let _ = writeln!(out, "{name}: {value}");
        }
    }
    out.trim_end().to_string()
}
