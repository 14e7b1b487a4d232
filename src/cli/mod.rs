//! CLI front-end for filmi.

pub mod commands;
pub mod errors;
pub mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::types::{Decade, DEFAULT_COUNT, DEFAULT_HUMOR, MAX_COUNT, MAX_HUMOR, MIN_COUNT, MIN_HUMOR};

const AFTER_LONG_HELP: &str = "\
Setup:
  1. Put your Google API key in a `.env` file: GOOGLE_API_KEY=your_api_key_here
     (or export GOOGLE_API_KEY / GEMINI_API_KEY, or set api_key in the config file)
  2. Run: filmi generate --topic \"villains\" --decade 1970s --count 5 --humor 3";

/// Bollywood Jokes Generator
#[derive(Parser, Debug)]
#[command(
    name = "filmi",
    version,
    about = "Bollywood Jokes Generator",
    after_long_help = AFTER_LONG_HELP
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to $FILMI_CONFIG or the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate jokes
    Generate(GenerateArgs),
    /// List the selectable decades
    Decades,
    /// Show the resolved configuration
    Config,
}

/// Arguments for `filmi generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Topic for the jokes
    #[arg(short, long)]
    pub topic: String,

    /// Bollywood decade (1950s .. 2020s)
    #[arg(short, long, default_value_t = Decade::default())]
    pub decade: Decade,

    /// Number of jokes
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_COUNT,
        value_parser = clap::value_parser!(u8).range(MIN_COUNT as i64..=MAX_COUNT as i64)
    )]
    pub count: u8,

    /// Humor scale: 1 is very mild, 5 is edgy but not offensive
    #[arg(
        short = 'H',
        long,
        default_value_t = DEFAULT_HUMOR,
        value_parser = clap::value_parser!(u8).range(MIN_HUMOR as i64..=MAX_HUMOR as i64)
    )]
    pub humor: u8,

    /// Gemini model (e.g. gemini-2.5-flash)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Temperature (0.0 - 2.0)
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Max output tokens
    #[arg(long)]
    pub max_tokens: Option<u32>,
}
