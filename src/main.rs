#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global drafts directory, set from command line
static DRAFTS_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the directory offered as the default location when exporting drafts
pub fn get_drafts_dir() -> PathBuf {
    DRAFTS_DIR.get().cloned().unwrap_or_else(|| {
        dirs::document_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mdraft")
    })
}

/// mdraft - Markdown draft editor with live preview
#[derive(Parser, Debug)]
#[command(name = "mdraft-desktop")]
#[command(about = "Draft posts in Markdown, preview them live, export as .md")]
struct Args {
    /// Default directory offered when exporting drafts
    #[arg(short, long)]
    drafts_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    if let Some(dir) = args.drafts_dir {
        let _ = DRAFTS_DIR.set(dir);
    }

    tracing::info!("Starting mdraft with drafts dir: {:?}", get_drafts_dir());

    // Wide window: editor and preview sit side by side
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("mdraft")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
