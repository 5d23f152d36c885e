use clap::Parser;
use navbar::Route;
use navbar::core::config;
use navbar::tui;
use navbar::tui::theme::Theme;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "navbar", about = "Bottom navigation bar demo host")]
struct Args {
    /// Config file (defaults to ~/.navbar/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Route to open first
    #[arg(short, long, value_enum)]
    start: Option<Route>,

    /// Log level written to navbar.log
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,

    /// Print the bar's view for the start route as JSON and exit
    #[arg(long)]
    snapshot: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to navbar.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("navbar.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    // Fail before touching the terminal if the config is bad
    let file_config = config::load_config(args.config.as_deref())?;
    let resolved = config::resolve(&file_config, args.start)?;
    let bar_style = Theme::from_config(&resolved.theme)?.bar_style();

    log::info!(
        "Navbar starting at {} with {} menu entries",
        resolved.start_route,
        resolved.catalog.len()
    );

    if args.snapshot {
        println!("{}", tui::snapshot_json(&resolved, &bar_style)?);
        return Ok(());
    }

    tui::run(resolved, bar_style)?;
    Ok(())
}
