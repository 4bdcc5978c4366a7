//! Supremum CLI
//!
//! # Usage
//!
//! ```bash
//! # Analyse a JSON request
//! supremum analyze --input request.json --pretty
//!
//! # Read from stdin, rational universe, thorough sampling
//! echo '{"components":[{"type":"interval","start":"-inf","end":1.4142135623730951,"left_open":true,"right_open":true}]}' \
//!     | supremum analyze --input - --universe Q --preset thorough
//!
//! # List the sequence catalogue
//! supremum presets
//!
//! # Print a preset as an editable YAML config
//! supremum config --preset fast > engine.yaml
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG=supremum_core=debug` for stage details.

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use supremum_core::{
    api::{validate_request, AnalysisRequest},
    config::ConfigError,
    AnalysisEngine, EngineConfig, EngineError, Preset, SequencePreset, Universe,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "supremum")]
#[command(about = "Supremum - set analysis & diameter engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a JSON request
    Analyze {
        /// Request file, or `-` for stdin
        #[arg(short, long)]
        input: String,

        /// Configuration preset (fast, balanced, thorough)
        #[arg(long, default_value = "balanced")]
        preset: String,

        /// YAML config file (overrides --preset)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Universe override (R or Q)
        #[arg(short, long)]
        universe: Option<String>,

        /// Pretty-print the result
        #[arg(long)]
        pretty: bool,
    },

    /// List catalogued sequences
    Presets,

    /// Print a preset's configuration as YAML
    Config {
        #[arg(long, default_value = "balanced")]
        preset: String,
    },
}

fn main() -> Result<(), EngineError> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            preset,
            config,
            universe,
            pretty,
        } => run_analyze(&input, &preset, config, universe.as_deref(), pretty),
        Commands::Presets => {
            list_presets();
            Ok(())
        }
        Commands::Config { preset } => {
            let preset = parse_preset(&preset)?;
            print!("{}", EngineConfig::preset(preset).to_yaml()?);
            Ok(())
        }
    }
}

fn run_analyze(
    input: &str,
    preset: &str,
    config: Option<PathBuf>,
    universe: Option<&str>,
    pretty: bool,
) -> Result<(), EngineError> {
    let config = match config {
        Some(path) => EngineConfig::from_yaml(&path.to_string_lossy())?,
        None => EngineConfig::preset(parse_preset(preset)?).build()?,
    };
    info!("{}", config.describe());

    let text = read_input(input)?;
    let mut request = AnalysisRequest::from_json(&text)?;
    if let Some(universe) = universe {
        request.options.universe = Universe::from_str(universe)
            .map_err(|message| supremum_core::ValidationError::options("universe", message))?;
    }
    validate_request(&request, &config)?;

    let engine = AnalysisEngine::new(config);
    let result = engine.analyze(&request.components, &request.options);

    let json = if pretty {
        result.to_json_pretty()?
    } else {
        result.to_json()?
    };
    println!("{}", json);
    Ok(())
}

fn parse_preset(name: &str) -> Result<Preset, EngineError> {
    Preset::from_str(name).map_err(|_| ConfigError::UnknownPreset(name.to_string()).into())
}

fn read_input(input: &str) -> Result<String, EngineError> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

fn list_presets() {
    for preset in SequencePreset::all() {
        println!("{:<24} {:<28} {}", preset.as_str(), preset.formula(), preset.describe());
    }
}
