mod generate;
mod inspect;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use schemasnap_core::OutputFormat;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "schemasnap")]
#[command(about = "Generate and check Schema.org LocalBusiness JSON-LD")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a document from a business field map
    Generate {
        /// JSON or YAML field map; `-` reads JSON from stdin
        #[arg(long)]
        input: PathBuf,
        /// Output rendering (defaults to SCHEMASNAP_OUTPUT_FORMAT)
        #[arg(long)]
        format: Option<OutputFormat>,
        /// Write to this file instead of stdout
        #[arg(long, conflicts_with = "output_dir")]
        output: Option<PathBuf>,
        /// Write to a timestamped file in this directory
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Print validation and completeness to stderr
        #[arg(long)]
        report: bool,
        /// Fill missing coordinates from this gazetteer (defaults to SCHEMASNAP_GAZETTEER_PATH)
        #[arg(long)]
        gazetteer: Option<PathBuf>,
    },
    /// Validate an existing JSON-LD document
    Validate {
        #[arg(long)]
        document: PathBuf,
    },
    /// Print the completeness score of a JSON-LD document
    Score {
        #[arg(long)]
        document: PathBuf,
    },
    /// Run form-field checks over a field map
    Check {
        #[arg(long)]
        input: PathBuf,
    },
    /// Render the built-in example business
    Example {
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// List supported business types
    Types,
}

fn main() -> anyhow::Result<ExitCode> {
    let config = schemasnap_core::load_app_config()?;
    init_tracing(&config.log_level);

    let cli = Cli::parse();
    tracing::debug!(env = %config.env, command = ?cli.command, "starting");

    let success = match cli.command {
        Commands::Generate {
            input,
            format,
            output,
            output_dir,
            report,
            gazetteer,
        } => generate::run_generate(
            &config,
            &generate::GenerateArgs {
                input,
                format: format.unwrap_or(config.output_format),
                output,
                output_dir,
                report,
                gazetteer: gazetteer.or_else(|| config.gazetteer_path.clone()),
            },
        )?,
        Commands::Validate { document } => inspect::run_validate(&document)?,
        Commands::Score { document } => inspect::run_score(&document)?,
        Commands::Check { input } => inspect::run_check(&config, &input)?,
        Commands::Example { format } => {
            generate::run_example(format.unwrap_or(config.output_format))?
        }
        Commands::Types => inspect::run_types(),
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Logs go to stderr so stdout carries only the document.
fn init_tracing(fallback_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
