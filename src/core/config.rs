//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.chatcanvas/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use crate::canvas::Palette;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChatCanvasConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub colors: ColorConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub server_url: Option<String>,
    pub user_id: Option<String>,
    pub default_chat: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub blink_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PollConfig {
    pub retry_delay_ms: Option<u64>,
}

/// Colour overrides as `#rrggbb` or `#rgb` strings.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ColorConfig {
    pub background: Option<String>,
    pub title_bar: Option<String>,
    pub font: Option<String>,
    pub sent_bubble: Option<String>,
    pub received_bubble: Option<String>,
    pub input_box: Option<String>,
    pub input_bubble: Option<String>,
    pub cursor: Option<String>,
    pub list_item: Option<String>,
    pub list_item_font: Option<String>,
    pub selected_item: Option<String>,
    pub selected_item_font: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3005";
pub const DEFAULT_USER_ID: &str = "me";
pub const DEFAULT_BLINK_INTERVAL_MS: u64 = 500;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub server_url: String,
    pub user_id: String,
    /// Chat to open on startup; `None` starts on the chat list.
    pub initial_chat: Option<String>,
    pub blink_interval: Duration,
    pub retry_delay: Duration,
    pub palette: Palette,
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub server_url: Option<String>,
    pub user_id: Option<String>,
    pub chat: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.chatcanvas/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".chatcanvas").join("config.toml"))
}

/// Load config from `~/.chatcanvas/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ChatCanvasConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ChatCanvasConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ChatCanvasConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ChatCanvasConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<ChatCanvasConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ChatCanvasConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r##"# ChatCanvas Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# server_url = "http://localhost:3005"   # Or set CHATCANVAS_SERVER_URL
# user_id = "me"                         # Or set CHATCANVAS_USER_ID
# default_chat = "general"               # Omit to start on the chat list

# [display]
# blink_interval_ms = 500

# [poll]
# After a failed poll the chat is reloaded in full once this delay has passed.
# Set to 0 to refetch immediately, which retries a down server in a tight loop.
# retry_delay_ms = 1000

# [colors]
# background = "#ffffff"
# title_bar = "#dddddd"
# font = "#000000"
# sent_bubble = "#aaaaaa"
# received_bubble = "#cccccc"
# input_box = "#bbbbbb"
# input_bubble = "#ffffff"
# cursor = "#000000"
# list_item = "#ffffff"
# list_item_font = "#000000"
# selected_item = "#0000ff"
# selected_item_font = "#ffffff"
"##;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ChatCanvasConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Server: CLI → env → config → default
    let server_url = cli
        .server_url
        .clone()
        .or_else(|| std::env::var("CHATCANVAS_SERVER_URL").ok())
        .or_else(|| config.general.server_url.clone())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

    // User: CLI → env → config → default
    let user_id = cli
        .user_id
        .clone()
        .or_else(|| std::env::var("CHATCANVAS_USER_ID").ok())
        .or_else(|| config.general.user_id.clone())
        .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

    let initial_chat = cli
        .chat
        .clone()
        .or_else(|| config.general.default_chat.clone());

    ResolvedConfig {
        server_url: server_url.trim_end_matches('/').to_string(),
        user_id,
        initial_chat,
        blink_interval: Duration::from_millis(
            config
                .display
                .blink_interval_ms
                .unwrap_or(DEFAULT_BLINK_INTERVAL_MS)
                .max(1),
        ),
        retry_delay: Duration::from_millis(
            config.poll.retry_delay_ms.unwrap_or(DEFAULT_RETRY_DELAY_MS),
        ),
        palette: resolve_palette(&config.colors),
    }
}

fn resolve_palette(colors: &ColorConfig) -> Palette {
    let mut p = Palette::default();
    let slots: [(&mut _, &str, &Option<String>); 12] = [
        (&mut p.background, "background", &colors.background),
        (&mut p.title_bar, "title_bar", &colors.title_bar),
        (&mut p.font, "font", &colors.font),
        (&mut p.sent_bubble, "sent_bubble", &colors.sent_bubble),
        (&mut p.received_bubble, "received_bubble", &colors.received_bubble),
        (&mut p.input_box, "input_box", &colors.input_box),
        (&mut p.input_bubble, "input_bubble", &colors.input_bubble),
        (&mut p.cursor, "cursor", &colors.cursor),
        (&mut p.list_item, "list_item", &colors.list_item),
        (&mut p.list_item_font, "list_item_font", &colors.list_item_font),
        (&mut p.selected_item, "selected_item", &colors.selected_item),
        (
            &mut p.selected_item_font,
            "selected_item_font",
            &colors.selected_item_font,
        ),
    ];
    for (slot, name, hex) in slots {
        Palette::override_with(slot, name, hex.as_deref());
    }
    p
}
