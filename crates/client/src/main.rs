//! Console RPG client binary.
//!
//! Loads content from the data directory, then hands stdin/stdout to the
//! menus.
//!
//! # Examples
//!
//! ```bash
//! RPG_DATA_DIR=./my-data RPG_MAX_WEIGHT=150 cargo run -p rpg-client
//! ```

use std::io;

use anyhow::{Context, Result};
use rpg_client::{Client, ClientConfig, Console, logging};
use rpg_content::ContentFactory;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();

    // Flushes the log file on drop
    let _guard = logging::setup_logging(config.session_id.as_deref())?;

    tracing::info!("Starting console RPG");
    tracing::info!("Data directory: {}", config.data_dir.display());

    let factory = ContentFactory::new(&config.data_dir);
    let game_config = factory
        .load_config()
        .context("Failed to load game configuration")?;
    let catalog = factory
        .load_catalog(&game_config)
        .context("Failed to load world items")?;
    let mut player = factory
        .load_player(&catalog, &game_config)
        .context("Failed to load player")?;

    if let Some(max_weight) = config.max_weight {
        tracing::info!(%max_weight, "carrying capacity overridden from environment");
        player.set_max_weight(max_weight);
    }

    tracing::info!(
        world_items = catalog.len(),
        player = %player.name,
        "content loaded"
    );

    let mut client = Client::builder().player(player).catalog(catalog).build()?;
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    client.run(&mut console)
}
