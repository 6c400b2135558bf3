//! dlpmask CLI
//!
//! Command-line front end for the dlpmask deidentification engine

mod config;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use config::DlpmaskConfig;
use dlpmask_engine::{DeidentifyEngine, DeidentifyResult, builtin_info_types};
use std::io::Read;
use std::path::PathBuf;
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "dlpmask")]
#[command(about = "dlpmask - Mask sensitive data in text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deidentify a string by masking sensitive data with a character
    DeidentifyMask(DeidentifyMaskArgs),
    /// List the built-in info types
    InfoTypes,
}

#[derive(Args)]
struct DeidentifyMaskArgs {
    /// The string to deidentify (read from stdin if omitted)
    text: Option<String>,

    /// Path to a YAML or TOML config file
    #[arg(short, long, env = "DLPMASK_CONFIG")]
    config: Option<PathBuf>,

    /// Maximum number of sensitive characters to mask in a match (0 masks all)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    number_to_mask: Option<i32>,

    /// Character to mask matching sensitive data with
    #[arg(short = 'm', long)]
    masking_character: Option<String>,

    /// Info type to detect; repeat for several (replaces the configured list)
    #[arg(short, long = "info-type")]
    info_types: Vec<String>,

    /// Mask from the end of each match instead of the start (`--reverse-order=false` turns
    /// off a configured value)
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    reverse_order: Option<bool>,

    /// Characters to leave untouched inside a match
    #[arg(long)]
    characters_to_ignore: Option<String>,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl DeidentifyMaskArgs {
    /// Apply command-line overrides (highest precedence)
    fn apply_overrides(&self, config: &mut DlpmaskConfig) {
        if let Some(number) = self.number_to_mask {
            config.masking.number_to_mask = number;
        }
        if let Some(ref masking_character) = self.masking_character {
            config.masking.masking_character = masking_character.clone();
        }
        if !self.info_types.is_empty() {
            config.info_types = self.info_types.clone();
        }
        if let Some(reverse_order) = self.reverse_order {
            config.masking.reverse_order = reverse_order;
        }
        if let Some(ref characters) = self.characters_to_ignore {
            config.masking.characters_to_ignore = characters.clone();
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::DeidentifyMask(args) => deidentify_mask(args),
        Commands::InfoTypes => {
            for name in builtin_info_types() {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

fn deidentify_mask(args: DeidentifyMaskArgs) -> Result<()> {
    let mut config = match args.config {
        Some(ref path) => DlpmaskConfig::from_file(path)?,
        None => DlpmaskConfig::default(),
    };

    // Merge environment variables (they override config file)
    config.merge_env()?;
    args.apply_overrides(&mut config);

    init_tracing(&config.logging.level)?;

    let text = match args.text {
        Some(ref text) => text.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            buffer
        }
    };

    let engine = DeidentifyEngine::new(config.build_patterns()?);
    debug!(
        info_types = ?engine.patterns().iter().map(|p| p.name()).collect::<Vec<_>>(),
        "Built deidentify engine"
    );

    let result = engine
        .deidentify(&text, &config.masking)
        .context("Deidentification failed")?;
    info!(matches = result.applied_matches.len(), "Deidentified text");

    print_result(&result, args.json)
}

fn print_result(result: &DeidentifyResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", result.masked_text);
    }
    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so stdout only carries the result
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(format!("{}", log_level)))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
