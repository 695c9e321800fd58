// SPDX-License-Identifier: MIT OR Apache-2.0
//! Ko-ChilLium - freelance web writer portfolio
//!
//! A desktop rendition of the portfolio site:
//! - Animated loading screen (hourglass, logo typewriter, accent words)
//! - Home, About, Works and Contact pages
//! - Contact form delivered to the log or a JSON outbox
//!
//! ## Architecture
//!
//! The loading animation lives in `kochillium_sequencer`. This binary owns
//! the window, settings and pages, and swaps the loading screen for the
//! site once the sequencer reports completion.

mod app;
mod contact;
mod content;
mod page;
mod pages;
mod settings;
mod shell;
mod theme;

use app::SiteApp;
use settings::SiteSettings;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() {
    let mut env_filter = EnvFilter::from_default_env();
    for directive in ["kochillium_site=debug", "kochillium_sequencer=info", "wgpu=warn", "naga=warn"] {
        if let Ok(directive) = directive.parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Ko-ChilLium v{}", env!("CARGO_PKG_VERSION"));

    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let settings = SiteSettings::load_or_default(&SiteSettings::file_path(&dir));

    if let Err(e) = SiteApp::run(settings) {
        tracing::error!("Site crashed: {e}");
        std::process::exit(1);
    }
}
