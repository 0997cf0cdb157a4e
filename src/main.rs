#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use showreel_core::EditorConfig;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Editor settings loaded at startup
static EDITOR_CONFIG: OnceLock<EditorConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the editor settings (loaded from the data dir or defaults)
pub fn get_editor_config() -> EditorConfig {
    EDITOR_CONFIG.get().cloned().unwrap_or_default()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("showreel")
}

/// Showreel - self-editable video portfolio
#[derive(Parser, Debug)]
#[command(name = "showreel-desktop")]
#[command(about = "Showreel - single-page video portfolio you can edit in place")]
struct Args {
    /// Data directory for storage
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn,showreel=info,showreel_core=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let config = match EditorConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring unreadable config, using defaults: {}", e);
            EditorConfig::default()
        }
    };

    let _ = DATA_DIR.set(data_dir.clone());
    let _ = EDITOR_CONFIG.set(config);

    tracing::info!("Starting with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Showreel")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
