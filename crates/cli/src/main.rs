mod app;
mod config;
mod prompt;
mod ui;

use anyhow::Context;
use clap::Parser;
use console::style;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracker_core::GameStore;

use app::TrackerApp;
use config::{Config, DEFAULT_CONFIG_PATH};
use prompt::TerminalPrompter;
use ui::FAREWELL;

/// Track games and their achievements from the terminal
#[derive(Parser, Debug)]
#[command(name = "tracker", version, about)]
struct Args {
    /// Path to the configuration file
    #[arg(long, env = "TRACKER_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the data file from the configuration
    #[arg(long, env = "TRACKER_DATA")]
    data: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load(&args.config);
    if let Some(data) = args.data {
        config.data_file = data;
    }

    let _guard = init_tracing(&config.log_dir);
    tracing::info!(data_file = %config.data_file.display(), "Tracker starting up");

    let store = GameStore::new(&config.data_file);
    let mut app = TrackerApp::new(config, store);
    tracing::info!(games = app.games().len(), "Library ready");
    let mut prompter = TerminalPrompter::new();
    app.run(&mut prompter).context("Interactive session ended unexpectedly")?;

    if app.has_unsaved_changes() {
        eprintln!(
            "{}",
            style("⚠️ Some changes could not be saved, see the log for details").yellow()
        );
    }
    println!("{}", style(FAREWELL).bold());

    tracing::info!("Tracker shutting down");
    Ok(())
}

/// Log to a daily file so output never interleaves with the prompts.
///
/// Without a usable log directory the session runs with logging off.
fn init_tracing(log_dir: &Path) -> Option<WorkerGuard> {
    let file_appender = match file_appender(log_dir) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!(
                "{}",
                style(format!(
                    "⚠️ Logging disabled, cannot write to {}: {e}",
                    log_dir.display()
                ))
                .yellow()
            );
            return None;
        }
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    Some(guard)
}

fn file_appender(log_dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("tracker")
        .build(log_dir)
}
