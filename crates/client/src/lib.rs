//! Console client for the RPG inventory core.
//!
//! # Architecture
//!
//! ```text
//! Client (composition root)
//!   └─→ GameSession
//!         ├─→ Player (rpg-core: inventory, equipment, item usage)
//!         └─→ WorldCatalog (rpg-content: items loaded from data files)
//! ```
//!
//! Menus only prompt and print; all rules live in rpg-core.

mod builder;
pub mod config;
pub mod console;
pub mod dirs;
pub mod logging;
pub mod menu;
pub mod session;

pub use builder::ClientBuilder;
pub use config::ClientConfig;
pub use console::Console;
pub use session::GameSession;

use std::io::{BufRead, Write};

use anyhow::Result;
use menu::MainChoice;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` receives the loaded player and catalog
/// 2. `Client::run()` shows the start screen
/// 3. On start, control stays in the game loop until the user quits or
///    input ends
pub struct Client {
    session: GameSession,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Run the menus against `console` until the user exits.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        if menu::main_menu(console)? == MainChoice::Exit {
            tracing::info!("exited from start screen");
            return Ok(());
        }

        tracing::info!(player = %self.session.player().name, "game started");
        menu::game_loop(console, &mut self.session)?;
        tracing::info!(
            items = self.session.player().items().len(),
            weight = %self.session.player().total_weight(),
            "game ended"
        );
        Ok(())
    }
}
