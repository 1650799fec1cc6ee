//! Inspect a document.
//!
//! ```bash
//! dsforge query
//! dsforge query variables --json
//! ```

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;

use super::common::CommandExecutor;
use crate::models::TextStyle;
use crate::query::{self, CollectionSummary, VariableSummary};
use crate::session::Session;
use crate::store::MemoryDocument;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum QueryTarget {
    #[default]
    All,
    Collections,
    Variables,
    TextStyles,
}

/// Show collections, variables, and text styles
#[derive(Args, Debug)]
pub struct QueryCommand {
    /// What to show
    #[arg(value_enum, default_value_t = QueryTarget::All)]
    target: QueryTarget,

    /// Print JSON instead of a listing
    #[arg(long)]
    json: bool,
}

impl CommandExecutor for QueryCommand {
    fn modifies_document(&self) -> bool {
        false
    }

    async fn run(self, session: &mut Session<MemoryDocument>) -> Result<()> {
        let store = session.store();
        let json = match self.target {
            QueryTarget::All => {
                let data = query::all(store).await?;
                if !self.json {
                    print_collections(&data.collections);
                    print_variables(&data.variables);
                    print_text_styles(&data.text_styles);
                    return Ok(());
                }
                serde_json::to_string_pretty(&data)
            }
            QueryTarget::Collections => {
                let collections = query::collections(store).await?;
                if !self.json {
                    print_collections(&collections);
                    return Ok(());
                }
                serde_json::to_string_pretty(&collections)
            }
            QueryTarget::Variables => {
                let variables = query::variables(store).await?;
                if !self.json {
                    print_variables(&variables);
                    return Ok(());
                }
                serde_json::to_string_pretty(&variables)
            }
            QueryTarget::TextStyles => {
                let styles = query::text_styles(store).await?;
                if !self.json {
                    print_text_styles(&styles);
                    return Ok(());
                }
                serde_json::to_string_pretty(&styles)
            }
        };

        println!("{}", json.context("Failed to serialize query result")?);
        Ok(())
    }
}

fn print_collections(collections: &[CollectionSummary]) {
    println!("{}", "Collections:".bold());
    if collections.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for collection in collections {
        let modes: Vec<&str> = collection.modes.iter().map(|m| m.name.as_str()).collect();
        println!(
            "  {} {} variables, modes: {}",
            collection.name.cyan(),
            collection.variables,
            modes.join(", ")
        );
    }
}

fn print_variables(variables: &[VariableSummary]) {
    println!("{}", "Variables:".bold());
    if variables.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for variable in variables {
        println!("  {} {}", variable.name.cyan(), variable.resolved_type.to_string().dimmed());
    }
}

fn print_text_styles(styles: &[TextStyle]) {
    println!("{}", "Text styles:".bold());
    if styles.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for style in styles {
        println!("  {} {}px {}", style.name.cyan(), style.font_size, style.font_name);
    }
}
