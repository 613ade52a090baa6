//! maestro - terminal console for the maestro process orchestrator
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use maestro_app::config::{load_settings, TreeSource};
use tracing::{info, warn};

/// maestro - browse maestro domains, agents and processes from the terminal
#[derive(Parser, Debug)]
#[command(name = "maestro")]
#[command(about = "Terminal console for the maestro process orchestrator", long_about = None)]
struct Args {
    /// maestro API base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Use the built-in demo tree and fixture data, no network
    #[arg(long)]
    demo: bool,

    /// Initial navigation path, e.g. /processes/<key>
    #[arg(long, value_name = "PATH", default_value = "/")]
    route: String,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Resolve the initial route once, print its view as JSON and exit
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = maestro_core::logging::init() {
        eprintln!("Logging disabled: {e}");
    }

    let mut settings = load_settings(args.config.as_deref());
    if let Some(base_url) = args.base_url {
        settings.api.base_url = base_url;
    }
    if args.demo {
        settings.tree.source = TreeSource::Demo;
    }
    if args.headless && settings.api.timeout().is_none() {
        warn!("No API timeout configured; headless mode waits for every response");
    }

    let client = maestro_console::build_client(&settings)?;
    info!("Using {}", client.describe());

    if args.headless {
        maestro_console::run_headless(settings, client, args.route).await?;
    } else {
        maestro_console::run(settings, client, args.route).await?;
    }
    Ok(())
}
