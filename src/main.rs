#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Global starting deck, set from command line
static START_BLANK: OnceLock<bool> = OnceLock::new();

/// Whether the board should start without the fixture cards
pub fn start_blank() -> bool {
    START_BLANK.get().copied().unwrap_or(false)
}

/// Card Court - Haikyuu card board
#[derive(Parser, Debug)]
#[command(name = "cardcourt-desktop")]
#[command(about = "Card Court - view, add, edit and delete volleyball cards")]
struct Args {
    /// Window title
    #[arg(short, long, default_value = "Card Court")]
    title: String,

    /// Logical window width
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Logical window height
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Start with an empty deck instead of the three fixture cards
    #[arg(short, long)]
    blank: bool,

    /// Log filter directive (overrides RUST_LOG), e.g. "cardcourt_core=debug"
    #[arg(long)]
    log: Option<String>,
}

fn init_logging(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.log.as_deref());

    let _ = START_BLANK.set(args.blank);

    tracing::info!(
        "Starting '{}' ({}x{}, {} deck)",
        args.title,
        args.width,
        args.height,
        if args.blank { "blank" } else { "seeded" }
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
