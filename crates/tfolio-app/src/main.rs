mod app;
mod config;
mod msg;
mod page;
mod panels;
mod scroll;
mod store;

use std::fs::File;
use std::io;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use tfolio_runtime::{Program, ProgramConfig};

use crate::app::PortfolioApp;
use crate::config::AppConfig;

/// Log to a file so the alternate screen stays clean. `TFOLIO_LOG`
/// selects the filter, defaulting to warnings only.
fn init_tracing() -> io::Result<()> {
    let log = File::create("tfolio.log")?;
    let filter = EnvFilter::try_from_env("TFOLIO_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    init_tracing()?;

    let page = PortfolioApp::new(AppConfig::default());
    let mut program = Program::with_config(page, ProgramConfig::default());
    program.run()
}
