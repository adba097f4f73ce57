use clap::Parser;
use exemplar::Settings;
use exemplar::cli::commands::{init, lookup, serve};
use exemplar::cli::{Cli, Commands, ServeArgs};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        eprintln!("Using default configuration for now.");
        Settings::default()
    });

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Serve(ServeArgs::default()));

    match command {
        Commands::Init { force } => init::run_init(force),
        Commands::Config => init::run_config(&config),
        Commands::Lookup(args) => {
            args.apply(&mut config);
            exemplar::logging::init_with_config(&config.effective_logging());
            lookup::run(args, &config).await
        }
        Commands::Serve(args) => {
            args.apply(&mut config);
            exemplar::logging::init_with_config(&config.effective_logging());
            match serve::run(config).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Server error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
