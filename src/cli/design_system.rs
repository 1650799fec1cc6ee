//! Create the default design system.
//!
//! ```bash
//! dsforge design-system
//! dsforge --document tokens.json design-system
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::common::{CommandExecutor, print_success};
use crate::query;
use crate::session::Session;
use crate::store::MemoryDocument;
use crate::systems;

/// Create spacing scales, color tokens, and typography in one go
#[derive(Args, Debug)]
pub struct DesignSystemCommand {}

impl CommandExecutor for DesignSystemCommand {
    async fn run(self, session: &mut Session<MemoryDocument>) -> Result<()> {
        let data = systems::design_system(session).await?;

        for collection in &data.collections {
            println!("  {} {} variables", collection.name.bold(), collection.variables);
        }
        for (group, count) in query::style_groups(&data.text_styles) {
            println!("  {} {count} text styles", group.bold());
        }
        print_success(&format!(
            "Design system created: {} collections, {} variables, {} text styles",
            data.collections.len(),
            data.variables.len(),
            data.text_styles.len()
        ));
        Ok(())
    }
}
