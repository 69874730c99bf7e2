//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands;
use paps_serve::output::OutputMode;

/// paps-serve - Inspect and validate PAPS API requests
#[derive(Parser, Debug)]
#[command(
    name = "paps-serve",
    version,
    about = "Inspect and validate PAPS API requests",
    long_about = "List the operations of the PAPS gig-jobs API, resolve them to URLs\n\
                  and check request payloads against the client-side field rules\n\
                  without sending anything."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.paps-serve/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to run (prints a hint when absent)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered operations
    Routes {
        /// Only operations of this resource (paps, spap, chat, ...)
        #[arg(short, long)]
        resource: Option<String>,

        /// Only operations callable without credentials
        #[arg(long)]
        public: bool,
    },

    /// Resolve an operation to its method and URL
    Resolve {
        /// Operation key, e.g. paps.get
        key: String,

        /// Path parameter as name=value (repeatable)
        #[arg(short, long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Validate a payload against an operation's rules
    Validate {
        /// Operation key, e.g. paps.create
        key: String,

        /// JSON payload
        #[arg(short, long, conflicts_with = "file")]
        body: Option<String>,

        /// Read the JSON payload from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Path parameter as name=value (repeatable)
        #[arg(short, long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Show version
    Version,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Routes { resource, public }) => {
            commands::routes(resource.as_deref(), public, output_mode)
        },
        Some(Command::Resolve { key, params }) => {
            commands::resolve(&key, &params, cli.config.as_deref(), output_mode)
        },
        Some(Command::Validate {
            key,
            body,
            file,
            params,
        }) => commands::validate(&key, body.as_deref(), file.as_deref(), &params, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "version": paps_serve::VERSION }));
            } else {
                println!("paps-serve v{}", paps_serve::VERSION);
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": paps_serve::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("paps-serve v{}", paps_serve::VERSION);
                println!("\nRun 'paps-serve --help' for usage");
                println!("Run 'paps-serve routes' to list operations");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
