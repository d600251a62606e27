#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod pages;
mod summary;
mod theme;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use subledger_core::{AppState, Catalog, Locale, Theme};

/// Subledger - Credit card subscription dashboard
#[derive(Parser, Debug)]
#[command(name = "subledger-desktop")]
#[command(about = "Subledger - Credit cards, subscriptions and free-trial alerts")]
struct Args {
    /// JSON catalog of cards to show instead of the demo data
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Initial language (zh or en)
    #[arg(short, long, default_value = "zh")]
    locale: Locale,

    /// Initial theme (light or dark)
    #[arg(short, long, default_value = "light")]
    theme: Theme,

    /// Print a text summary and exit instead of opening a window
    #[arg(long)]
    summary: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::demo(),
    };

    if args.summary {
        print!("{}", summary::render(&catalog, args.locale)?);
        return Ok(());
    }

    tracing::info!(
        cards = catalog.len(),
        locale = %args.locale,
        theme = %args.theme,
        "Starting Subledger"
    );

    context::install(catalog, AppState::new(args.locale, args.theme));

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Subledger")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 820.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
