use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use webscrap::core::config::{self, WebscrapConfig};
use webscrap::tui;

#[derive(Parser)]
#[command(
    name = "webscrap",
    about = "Summarize web pages, YouTube videos and searches from the terminal"
)]
struct Args {
    /// Base URL of the summarization backend (overrides config and env)
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The logger isn't up yet, so config problems go to stderr.
    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: {e}. Using default settings.");
        WebscrapConfig::default()
    });
    let resolved = config::resolve(&file_config, args.backend_url.as_deref());
    for warning in &resolved.warnings {
        eprintln!("Warning: {warning}");
    }

    // stdout belongs to the TUI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(&resolved.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
        }
        Err(e) => eprintln!(
            "Warning: cannot open log file {}: {e}",
            resolved.log_file.display()
        ),
    }

    log::info!("WebScrap starting up with backend: {}", resolved.backend_url);
    for warning in &resolved.warnings {
        log::warn!("Config: {warning}");
    }

    tui::run(resolved)
}
