//! filmi: Bollywood joke generator backed by Google Gemini.
//!
//! Collects a topic, decade, joke count and humor level, turns them into a
//! prompt, sends it to Gemini and renders whatever comes back (jokes, a
//! safety-block notice, an empty-result notice, or the error) as one string.
//!
//! # Quick Start
//!
//! ```no_run
//! use filmi::prelude::*;
//!
//! # async fn example() -> filmi::error::Result<()> {
//! let config = FilmiConfig::load()?;
//! let generator = JokeGenerator::new(filmi::provider::create_provider(&config)?);
//! let request = JokeRequest::new("villains", Decade::Seventies, 5, 3)?;
//! println!("{}", generator.generate_display(&request).await);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod generation;
pub mod models;
pub mod prelude;
pub mod provider;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
