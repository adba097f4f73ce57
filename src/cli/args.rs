//! CLI argument parsing using clap.

use clap::{
    Args, Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

use crate::config::Settings;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Code example lookup server
#[derive(Parser, Debug)]
#[command(
    name = "exemplar",
    version = env!("CARGO_PKG_VERSION"),
    about = "Serve code examples for language symbols",
    long_about = "Look up documentation and example code for a symbol through \
                  language-specific documentation tools such as `godoc -ex`.",
    styles = clap_cargo_style(),
    after_help = "Examples:\n  exemplar serve --port 8844\n  exemplar lookup go io Reader --format text\n  curl 'http://localhost:8844/go/Reader?package=io&format=text'"
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    #[command(about = "Start the HTTP server")]
    Serve(ServeArgs),

    /// Look up one symbol and print the result
    #[command(
        about = "Look up a symbol without starting the server",
        after_help = "Examples:\n  exemplar lookup go io Reader\n  exemplar lookup go net http Get --format html\n  exemplar lookup go Reader --package io"
    )]
    Lookup(LookupArgs),

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,

    /// Write a default settings file
    #[command(about = "Create .exemplar/settings.toml with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Interface to bind (overrides config)
    #[arg(long)]
    pub bind: Option<String>,

    /// Log every request and documentation tool invocation
    #[arg(long)]
    pub debug: bool,

    /// Seconds to wait for a documentation tool, 0 waits forever
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Language key, e.g. go
    pub language: String,

    /// Package segments followed by the symbol
    #[arg(required = true, value_name = "PATH")]
    pub path: Vec<String>,

    /// Package path when only the symbol is given positionally
    #[arg(long)]
    pub package: Option<String>,

    /// Output representation: text, html or json
    #[arg(short, long)]
    pub format: Option<String>,

    /// Method name hint
    #[arg(long)]
    pub method: Option<String>,

    /// Log the lookup and the documentation tool invocation
    #[arg(long)]
    pub debug: bool,

    /// Seconds to wait for a documentation tool, 0 waits forever
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

impl ServeArgs {
    /// Apply command line overrides on top of loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(port) = self.port {
            settings.server.port = port;
        }
        if let Some(bind) = &self.bind {
            settings.server.bind = bind.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.providers.timeout_secs = timeout;
        }
        settings.debug |= self.debug;
    }
}

impl LookupArgs {
    /// Apply command line overrides on top of loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(timeout) = self.timeout {
            settings.providers.timeout_secs = timeout;
        }
        settings.debug |= self.debug;
    }
}
