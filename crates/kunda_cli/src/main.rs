mod error;
mod report;
mod settings;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use kunda_vedic_base::analyze;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::report::write_report;
use crate::settings::{apply_flags, load_config};

const PROMPT: &str = "Enter Lagna (e.g., Li,14,14,9 or 14,14,9): ";

#[derive(Parser)]
#[command(name = "kunda", about = "Kunda (D-81) Lagna rectification report")]
struct Cli {
    /// Lagna as [Sign,]Degrees,Minutes,Seconds (prompted for when omitted)
    #[arg(allow_hyphen_values = true)]
    lagna: Option<String>,
    /// Reject sign codes outside AR..PI instead of assuming Mesha
    #[arg(long)]
    strict_sign: bool,
    /// Require degrees in [0,30) and minutes/seconds in [0,60)
    #[arg(long)]
    strict_range: bool,
    /// TOML file with `sign-policy` / `range-policy`
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log verbosity on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_lagna_line() -> Result<String, CliError> {
    let mut stdout = io::stdout();
    write!(stdout, "{PROMPT}")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = apply_flags(
        load_config(cli.config.as_deref())?,
        cli.strict_sign,
        cli.strict_range,
    );
    info!(?config, "effective config");

    let input = match cli.lagna {
        Some(lagna) => lagna,
        None => read_lagna_line()?,
    };
    let (chart, report) = analyze(&input, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &chart, &report)?;
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
