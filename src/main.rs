//! Fun Bun - terminal client
//!
//! Sign up, log in, and pick games from the Fun Bun catalog.

use fun_bun::{app, core, App, CatalogClient};

use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration (handles CLI args, env vars, and config file)
    let config = match core::config::Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Print error to stderr since logging isn't initialized yet
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let _logger = match core::Logger::init(&config.logging) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return Err(e);
        }
    };

    info!("Starting Fun Bun v{}", fun_bun::VERSION);
    info!(
        endpoint = %config.catalog.endpoint,
        request_timeout = config.catalog.request_timeout,
        "Catalog configuration"
    );

    let client = CatalogClient::new(&config.catalog)?;
    let mut prompter = app::DialoguerPrompter::new();
    let mut app = App::new();

    app::run(&mut app, &client, &mut prompter).await?;

    Ok(())
}
