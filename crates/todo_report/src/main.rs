// crates/todo_report/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use render_report::ReportStyle;
use todo_report::{run, ReportConfig};

/// Sends log output to stderr so it never mixes with the report.
/// `RUST_LOG` wins over the `--verbose` default.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}

fn main() -> Result<()> {
    let matches = Command::new("todo_report")
        .version("0.1.0")
        .about("Prints TODO records grouped by assignee and sorted by priority")
        .arg(
            Arg::new("style")
                .short('s')
                .long("style")
                .num_args(1)
                .value_parser(|s: &str| s.parse::<ReportStyle>())
                .default_value("asciidoc")
                .help("Report layout: asciidoc or plain"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("inputs")
                .value_name("FILE")
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(PathBuf))
                .help("JSON files to concatenate; reads stdin when omitted or for `-`"),
        )
        .get_matches();

    let config = ReportConfig::new(
        matches
            .get_many::<PathBuf>("inputs")
            .unwrap_or_default()
            .cloned()
            .collect(),
        matches.get_one::<ReportStyle>("style").copied().unwrap_or_default(),
        matches.get_flag("verbose"),
    );

    init_logging(config.verbose);
    log::debug!("configuration: {:?}", config);

    let report = run(&config).context("Failed to generate TODO report")?;

    let stdout = io::stdout();
    let mut stdout_lock = stdout.lock();
    stdout_lock
        .write_all(report.as_bytes())
        .context("Failed to write report to stdout")?;
    stdout_lock.flush().context("Failed to flush stdout")?;
    Ok(())
}
