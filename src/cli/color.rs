//! Create a color token.
//!
//! ```bash
//! dsforge color main Colors/primary "#007AFF" "#0A84FF"
//! ```

use anyhow::Result;
use clap::Args;

use super::common::{CommandExecutor, print_success};
use crate::session::Session;
use crate::store::MemoryDocument;
use crate::systems;

/// Create or update a color variable with one value per mode
#[derive(Args, Debug)]
pub struct ColorCommand {
    /// Variable name inside the folder
    name: String,

    /// Collection, optionally followed by a folder (e.g. "Colors/primary")
    path: String,

    /// Colors as #RRGGBB, one per mode
    #[arg(required = true, value_name = "HEX")]
    colors: Vec<String>,
}

impl CommandExecutor for ColorCommand {
    async fn run(self, session: &mut Session<MemoryDocument>) -> Result<()> {
        let built = systems::color_token(session, &self.name, &self.path, &self.colors).await?;
        print_success(&format!(
            "Color {} created in {}",
            built.variable.name, built.collection.name
        ));
        Ok(())
    }
}
