//! hbuzz - Steam Deck trackpad haptic feedback test
//!
//! Finds the Steam Deck controller's haptic HID interface and buzzes both
//! trackpads every two seconds until interrupted. Behavior is fully
//! hardcoded; there are no flags beyond `--help`/`--version`, and `RUST_LOG`
//! changes log verbosity only.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod locator;
mod runner;

use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hbuzz_hid_common::{HidError, backend::HidapiPort};

use crate::runner::{BuzzConfig, SessionSummary, run_session};

#[derive(Parser)]
#[command(name = "hbuzz")]
#[command(about = "Steam Deck trackpad haptic feedback test")]
#[command(version)]
struct Cli {}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hbuzz=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn run() -> Result<SessionSummary> {
    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop_clone = Arc::clone(&stop);
        ctrlc::set_handler(move || {
            stop_clone.store(true, Ordering::Relaxed);
        })
        .context("failed to install Ctrl-C handler")?;
    }

    println!("Steam Deck Haptic Feedback Test");
    println!("Press Ctrl+C to exit");
    println!("{}", "-".repeat(40));

    let port = HidapiPort::new().context("failed to initialise HID API")?;
    let summary = run_session(&port, &BuzzConfig::default(), &stop)?;
    Ok(summary)
}

/// Exit code for a fatal error: 2 when the controller was not found, 1 for
/// anything else (open failure, missing HID support).
fn fatal_exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<HidError>() {
        Some(HidError::DeviceNotFound(_)) => 2,
        _ => 1,
    }
}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    init_logging();

    match run() {
        Ok(summary) => {
            println!();
            println!("Exiting...");
            println!("Sent {} pulse cycles", summary.cycles);
            if summary.write_failures > 0 {
                eprintln!("({} writes failed)", summary.write_failures);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!();
            eprintln!("Error: could not open the Steam Deck controller");
            eprintln!("Details: {err:#}");
            eprintln!();
            eprintln!("Troubleshooting:");
            eprintln!("  - Make sure you are running on a Steam Deck");
            eprintln!("  - hidraw access may need elevated permissions or a udev rule");
            eprintln!("  - The hidapi hidraw backend must be available");
            ExitCode::from(fatal_exit_code(&err))
        }
    }
}
