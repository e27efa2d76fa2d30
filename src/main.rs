//! Moderation Panel - headless driver
//!
//! This is the binary entry point. All logic lives in the library.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

use modpanel::{run_headless, services, EventLog, Fixture, Permissions};
use modpanel_app::config::{init_config_file, load_settings, CONFIG_FILENAME};
use modpanel_app::Router;
use modpanel_core::{UserId, Viewer};

/// Moderation Panel - drive the panel from stdin and print host calls as NDJSON
#[derive(Parser, Debug)]
#[command(name = "modpanel")]
#[command(about = "Headless driver for the moderation control panel", long_about = None)]
struct Args {
    /// JSON array of user records to serve as the registry
    #[arg(long, value_name = "FILE")]
    users: Option<PathBuf>,

    /// Settings file (defaults to ./modpanel.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a default settings file into DIR and exit
    #[arg(long, value_name = "DIR")]
    init_config: Option<PathBuf>,

    /// Id of the viewer issuing commands
    #[arg(long, default_value_t = 1)]
    viewer: UserId,

    /// Display name of the viewer
    #[arg(long, default_value = "Admin")]
    viewer_name: String,

    /// Locale of the viewer
    #[arg(long, default_value = "en")]
    locale: String,

    /// Capabilities the viewer lacks (repeatable), e.g. modpanel.ban
    #[arg(long = "deny", value_name = "CAPABILITY")]
    denied: Vec<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    modpanel_core::logging::init()?;

    let args = Args::parse();

    if let Some(dir) = args.init_config {
        let path = init_config_file(&dir)?;
        eprintln!("Settings file at {}", path.display());
        return Ok(());
    }

    let settings_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let settings = load_settings(&settings_path);

    let fixture = match &args.users {
        Some(path) => Fixture::load(path)?,
        None => Fixture::default(),
    };

    let events = EventLog::new();
    let permissions = Permissions::denying(args.denied);
    let mut router = Router::new(services(&fixture, permissions, &events), settings);
    let viewer = Viewer::new(args.viewer, args.viewer_name, args.locale);

    run_headless(
        &mut router,
        &viewer,
        &events,
        io::stdin().lock(),
        io::stdout().lock(),
    )?;

    tracing::info!("Moderation panel exiting");
    Ok(())
}
