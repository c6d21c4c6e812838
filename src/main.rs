use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use sage::core::config;
use sage::tui;

#[derive(Parser)]
#[command(name = "sage", about = "Terminal client for the tutor chat service")]
struct Args {
    /// Base URL of the tutor chat service
    #[arg(short, long)]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to sage.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("sage.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config unusable ({e}), falling back to defaults");
        Default::default()
    });
    let resolved = config::resolve(&file_config, args.server.as_deref());

    log::info!("Sage starting up (server: {})", resolved.server_url);

    tui::run(resolved)
}
