//! rtlcss CLI
//!
//! Command-line interface for generating right-to-left override stylesheets.

mod commands;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(name = "rtlcss")]
#[command(about = "Generate right-to-left override stylesheets")]
#[command(version = rtlcss_core::VERSION)]
#[command(
    long_about = "Generates a .rtl.css override next to each input stylesheet, containing only\n\
the declarations whose directional meaning changes under right-to-left layout.\n\
\n\
Examples:\n  \
rtlcss site.css              # writes site.rtl.css\n  \
rtlcss styles/               # every .css file under styles/\n  \
rtlcss -e skip.txt site.css  # honor a per-selector exclusion list\n  \
rtlcss --stdout site.css     # print the override instead of writing it"
)]
struct Cli {
    /// Stylesheet files or directories to process
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Exclusion-list file (one property:selector pair per line)
    #[arg(short, long, value_name = "FILE")]
    exclusions: Option<PathBuf>,

    /// Print overrides to stdout instead of writing .rtl.css files
    #[arg(long)]
    stdout: bool,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    rtlcss_core::init_tracing(cli.verbose, cli.no_color);

    match commands::generate_command(&cli.paths, cli.exclusions.as_deref(), cli.stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
