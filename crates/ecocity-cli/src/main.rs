//! Smart Eco City interactive text menu.
//!
//! Usage:
//!   cargo run -p ecocity-cli
//!   cargo run -p ecocity-cli -- --load-log --log-level info

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ecocity_logic::config::CityConfig;
use ecocity_logic::constants::LOG_FILE;
use ecocity_logic::City;

mod menu;

use menu::Menu;

#[derive(Parser, Debug)]
#[command(author, version, about = "Text simulation of a small eco city", long_about = None)]
struct Args {
    /// File the activity log is saved to and loaded from
    #[arg(long, default_value = LOG_FILE)]
    log_file: PathBuf,

    /// Load the log file into memory before showing the menu
    #[arg(long)]
    load_log: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = args
        .log_level
        .parse()
        .unwrap_or(log::LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let mut city = City::new(CityConfig::with_log_path(&args.log_file));
    if args.load_log {
        match city.load_log() {
            Ok(n) => log::info!("Loaded {} entries from {}", n, args.log_file.display()),
            Err(err) => {
                log::warn!("{err}");
                eprintln!("No previous log found.");
            }
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock()).run(&mut city)?;
    Ok(())
}
