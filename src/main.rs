use anyhow::Context;
use clap::Parser;
use std::path::Path;

use password_tool::cli::{Args, ConsoleTerminal, Shell};
use password_tool::core::Config;
use password_tool::logging;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let config = Config::load();
    logging::init(&config).context("failed to initialise logging")?;
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    ctrlc::set_handler(|| {
        log::info!("Ctrl+C received, exiting");
        println!("\nExiting. Bye!\n");
        std::process::exit(0);
    })
    .context("failed to set Ctrl+C handler")?;

    log::info!("🔒 Starting password tool");

    let mut shell = Shell::new(ConsoleTerminal::new(), &config);
    shell.run().map_err(|e| {
        log::error!("Terminal session failed: {}", e);
        e
    })?;

    log::info!("✅ Password tool shut down");
    Ok(())
}
