//! Client builder.

use anyhow::{Context, Result};
use rpg_content::WorldCatalog;
use rpg_core::Player;

use crate::Client;
use crate::session::GameSession;

/// Builder for constructing a Client with proper validation.
#[derive(Default)]
pub struct ClientBuilder {
    player: Option<Player>,
    catalog: Option<WorldCatalog>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the player (required).
    ///
    /// Normally built from `player.ron` via `ContentFactory::load_player`.
    pub fn player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }

    /// Set the world catalog (required).
    pub fn catalog(mut self, catalog: WorldCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the player or the catalog is not set.
    pub fn build(self) -> Result<Client> {
        let player = self
            .player
            .context("Player is required. Use .player() to set it.")?;

        let catalog = self
            .catalog
            .context("Catalog is required. Use .catalog() to set it.")?;

        Ok(Client {
            session: GameSession::new(player, catalog),
        })
    }
}
