//! filmi CLI binary entry point.

use clap::Parser;
use filmi::cli::commands::{handle_generate, load_config, render_config, render_decades};
use filmi::cli::errors::format_error_help;
use filmi::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    filmi::cli::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate(args) => match load_config(cli.config.as_deref()) {
            Ok(config) => handle_generate(&args, config).await,
            Err(e) => Err(e),
        },
        Commands::Decades => {
            println!("{}", render_decades());
            Ok(())
        }
        Commands::Config => load_config(cli.config.as_deref()).map(|config| {
            println!("{}", render_config(&config));
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", format_error_help(&e));
        std::process::exit(1);
    }
}
