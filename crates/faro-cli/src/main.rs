mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "faro",
    version,
    about = "Extract uptime/downtime records from PRTG monitoring PDF reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract records from every PDF in a directory into CSV reports
    Extract {
        /// Directory containing the PDF reports
        data_dir: PathBuf,

        /// Custom target catalog (JSON file); defaults to the prtg-caba preset
        #[arg(short, long, value_name = "FILE")]
        targets: Option<PathBuf>,

        /// Directory for the CSV output files (default: the data directory)
        #[arg(short = 'O', long = "out-dir", value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Aggregate a corpus into uptime/downtime totals and percentages
    Summary {
        /// Directory containing the PDF reports
        data_dir: PathBuf,

        /// Custom target catalog (JSON file); defaults to the prtg-caba preset
        #[arg(short, long, value_name = "FILE")]
        targets: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Manage and inspect target catalogs
    Targets {
        #[command(subcommand)]
        action: TargetsAction,
    },
}

#[derive(Subcommand)]
enum TargetsAction {
    /// List predefined target catalogs
    List,
    /// Print the JSON catalog schema with field descriptions and example
    Schema,
    /// Validate a custom catalog file
    Validate {
        /// Path to JSON catalog file
        file: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            data_dir,
            targets,
            out_dir,
        } => commands::extract::run(data_dir, targets, out_dir),
        Commands::Summary {
            data_dir,
            targets,
            output,
        } => commands::summary::run(data_dir, targets, &output),
        Commands::Targets { action } => match action {
            TargetsAction::List => commands::targets::list(),
            TargetsAction::Schema => commands::targets::schema(),
            TargetsAction::Validate { file } => commands::targets::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
