//! Realm Navigator CLI — replay navigation scripts and run the self-check.
//!
//! Commands:
//! - `replay` — run a script (`open <screen>`, `select <id>`, `back`) against a
//!   fresh session and print the state after every step
//! - `scenarios` — run the built-in scenarios and report pass/fail

mod replay;
mod scenarios;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use realmnav_core::logging::{init_logging, LogConfig};
use realmnav_core::parse_script;

#[derive(Parser)]
#[command(
    name = "realmnav",
    about = "Realm Navigator CLI — navigation history replay and self-check"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a navigation script and print the resulting state trace.
    Replay {
        /// Script file, one command per line. `-` reads stdin.
        file: PathBuf,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Run the built-in navigation scenarios.
    Scenarios,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose)).context("initializing logging")?;

    match cli.command {
        Commands::Replay { file, format } => run_replay(&file, format),
        Commands::Scenarios => run_scenarios(),
    }
}

fn run_replay(file: &Path, format: OutputFormat) -> Result<()> {
    let source = read_script(file)?;
    let commands =
        parse_script(&source).with_context(|| format!("parsing script {}", file.display()))?;
    info!(commands = commands.len(), "replaying script");

    let steps = replay::replay(&commands);
    match format {
        OutputFormat::Text => print!("{}", replay::render_text(&steps)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&steps)?),
    }
    Ok(())
}

fn read_script(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        return std::io::read_to_string(std::io::stdin()).context("reading script from stdin");
    }
    std::fs::read_to_string(file).with_context(|| format!("reading script {}", file.display()))
}

fn run_scenarios() -> Result<()> {
    let mut failed = 0;
    for scenario in scenarios::SCENARIOS {
        let outcome = scenarios::run(scenario)
            .with_context(|| format!("scenario `{}` has an invalid script", scenario.name))?;
        if outcome.passed() {
            println!("ok    {}", outcome.name);
        } else {
            failed += 1;
            println!("FAIL  {}", outcome.name);
            for failure in &outcome.failures {
                println!("      {failure}");
            }
        }
    }

    let total = scenarios::SCENARIOS.len();
    println!("\n{} passed, {failed} failed", total - failed);
    if failed > 0 {
        bail!("{failed} of {total} scenarios failed");
    }
    Ok(())
}
