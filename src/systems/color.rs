//! Color tokens.

use anyhow::Result;

use crate::models::ResolvedType;
use crate::path::ResourcePath;
use crate::session::Session;
use crate::store::DocumentStore;
use crate::variables::{BuiltVariable, VariableBuilder};

/// Create or update the `COLOR` variable `name` under `path`.
///
/// `hex_colors[i]` becomes the value for mode `i` of the collection.
pub async fn color_token<S: DocumentStore>(
    session: &mut Session<S>,
    name: &str,
    path: &str,
    hex_colors: &[String],
) -> Result<BuiltVariable> {
    let parsed = ResourcePath::parse(path)?;
    tracing::debug!(
        "Creating color token: {} in collection: {}",
        parsed.qualify(name),
        parsed.namespace
    );

    VariableBuilder::new()
        .collection(path)
        .variable(name, ResolvedType::Color)
        .hex(hex_colors.iter().cloned())
        .build(session)
        .await
}
