use clap::{Parser, Subcommand};
use colored::Colorize;
use lcs_convert::cli;
use lcs_convert::config::ProjectLayout;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "lcs-convert")]
#[command(about = "Convert LCS/TS chainage workbooks and platform CSVs to JSON assets")]
#[command(long_about = "lcs-convert - route data to JSON assets

INPUTS (relative to --root):
  assets/extra/lcschainage1.xlsm   sheets LCS and TS
  assets/extra/platform_ts.csv     columns Platform, TrackSectionsRaw

OUTPUTS (relative to --root):
  assets/data/lcs.json
  assets/data/ts.json
  assets/data/platform_ts.json

COMMANDS:
  excel     - LCS + TS sheets to JSON
  platform  - Platform CSV to JSON
  all       - Both conversions

The platform CSV is extracted by hand from plat_TS.pdf.

EXAMPLES:
  lcs-convert excel
  lcs-convert --root ../app all")]
#[command(version)]
struct Cli {
    /// Project root that all input and output paths are resolved against
    #[arg(long, global = true, env = "LCS_CONVERT_ROOT", default_value = ".")]
    root: PathBuf,

    /// Show verbose conversion steps and debug diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the LCS and TS workbook sheets to JSON
    Excel,

    /// Convert the platform/track-sections CSV to JSON
    Platform,

    /// Run the workbook and platform conversions in turn
    All,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "lcs_convert=debug"
    } else {
        "lcs_convert=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let layout = ProjectLayout::new(&cli.root);
    let result = match cli.command {
        Commands::Excel => cli::excel(&layout, cli.verbose),
        Commands::Platform => cli::platform(&layout, cli.verbose),
        Commands::All => cli::all(&layout, cli.verbose),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".bold().red(), e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            eprintln!("\n{}", "✗ Conversion failed!".bold().red());
            ExitCode::FAILURE
        }
    }
}
