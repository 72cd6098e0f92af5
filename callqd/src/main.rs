//! # Call center daemon (callqd)
//!
//! Interactive terminal front end for the call center.
//!
//! ## Usage
//!
//! ```bash
//! callqd [--log-format <pretty|compact|json>] [--log-level <filter>] [--quiet]
//!        [--queue-capacity <slots>]
//! ```
//!
//! Log lines go to stderr so they never mix with the menu on stdout. The
//! log format can also be chosen with `RUST_LOG_FORMAT`, and the filter with
//! `RUST_LOG`.

use std::io;

use anyhow::{anyhow, Context, Result};
use callq_foundation::collections::INITIAL_CAPACITY;
use callqd::{CallCenter, CenterConfig, LogConfig, LogFormat, Menu};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Call center CLI arguments
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Log output format
    #[arg(long, env = "RUST_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Log filter directive, e.g. `info` or `callqd=debug`
    /// Overrides RUST_LOG when given
    #[arg(long)]
    log_level: Option<String>,

    /// Do not print the option list before each prompt
    #[arg(short, long)]
    quiet: bool,

    /// Initial slot count of the waiting-call queue
    #[arg(long, default_value_t = INITIAL_CAPACITY)]
    queue_capacity: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    initialize_tracing(&LogConfig {
        format: args.log_format,
        filter: args.log_level.clone(),
    })?;

    let config = CenterConfig {
        queue_capacity: args.queue_capacity,
    };
    let center = CallCenter::with_config(&config).context("Failed to create call center")?;
    info!(queue_capacity = config.queue_capacity, "call center ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), center).show_options(!args.quiet);
    menu.run().context("Call center menu failed")?;

    let (center, _) = menu.into_parts();
    let queue = center.queue_status();
    let stack = center.stack_status();
    info!(
        waiting = queue.waiting,
        answered = stack.answered,
        "call center closed"
    );

    Ok(())
}

/// Initialize the tracing system for logging
fn initialize_tracing(config: &LogConfig) -> Result<()> {
    let filter = match &config.filter {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("Invalid log filter: {directive}"))?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(callqd::config::DEFAULT_LOG_FILTER)),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Json => subscriber.json().try_init(),
        LogFormat::Compact => subscriber.compact().try_init(),
        LogFormat::Pretty => subscriber.pretty().try_init(),
    };
    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}
