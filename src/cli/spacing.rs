//! Create a spacing scale.
//!
//! ```bash
//! dsforge spacing Spacing/golden --factor 1.618
//! dsforge spacing Spacing/tight --base 4 --factor 1.5 --anchor xs
//! ```

use anyhow::Result;
use clap::Args;

use super::common::{CommandExecutor, print_success};
use crate::session::Session;
use crate::store::MemoryDocument;
use crate::systems;

/// Create or update a modular spacing scale
#[derive(Args, Debug)]
pub struct SpacingCommand {
    /// Collection, optionally followed by a folder (e.g. "Spacing/golden")
    path: String,

    /// Value of the anchor step
    #[arg(long, default_value_t = 16.0)]
    base: f64,

    /// Ratio between neighbouring steps
    #[arg(long)]
    factor: f64,

    /// Step that receives the base value (3xs..3xl, default md)
    #[arg(long)]
    anchor: Option<String>,
}

impl CommandExecutor for SpacingCommand {
    async fn run(self, session: &mut Session<MemoryDocument>) -> Result<()> {
        let variables =
            systems::spacing_system(session, &self.path, self.base, self.factor, self.anchor.as_deref())
                .await?;
        print_success(&format!("Spacing scale {} created ({} variables)", self.path, variables.len()));
        Ok(())
    }
}
