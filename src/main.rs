use chatcanvas::core::config::{self, CliOverrides};
use chatcanvas::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "chatcanvas", about = "Terminal client for a long-polling chat server")]
struct Args {
    /// Chat server base URL (e.g. http://localhost:3005)
    #[arg(short, long)]
    server: Option<String>,

    /// Sender id; messages from this id are drawn as sent
    #[arg(short, long)]
    user: Option<String>,

    /// Open this chat directly instead of the chat list
    #[arg(short, long)]
    chat: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to chatcanvas.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("chatcanvas.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            server_url: args.server,
            user_id: args.user,
            chat: args.chat,
        },
    );

    log::info!(
        "ChatCanvas starting up: server={} user={} chat={:?}",
        resolved.server_url,
        resolved.user_id,
        resolved.initial_chat
    );

    tui::run(resolved)
}
