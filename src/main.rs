//! Demo binary: run a step wizard in the terminal.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc;

use stepflow::Wizard;

mod app;
mod config;
mod logging;
mod ui;

use app::App;

#[derive(Parser)]
#[command(name = "stepflow", about = "Step-wizard demo", version)]
struct Cli {
    /// Wizard definition file (TOML); defaults to the bundled demo
    #[arg(long, value_name = "FILE")]
    definition: Option<PathBuf>,

    /// Fade duration in milliseconds
    #[arg(long, default_value_t = 300)]
    fade_ms: u64,

    /// UI tick rate in milliseconds
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Directory for log files
    #[arg(long, default_value = ".stepflow/logs")]
    log_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging_handle = logging::init_logging(&cli.log_dir, cli.debug)?;

    let definition = match cli.definition {
        Some(path) => config::load_definition(&path)?,
        None => config::builtin_definition()?,
    };

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let wizard = Wizard::new(&definition, event_tx)?
        .with_fade_duration(Duration::from_millis(cli.fade_ms));

    let mut app = App::new(wizard, event_rx, Duration::from_millis(cli.tick_ms));
    app.run().await?;

    println!("Log file: {}", logging_handle.log_file_path.display());
    Ok(())
}
