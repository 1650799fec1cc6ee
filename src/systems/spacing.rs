//! Modular spacing scales.

use anyhow::Result;

use super::{anchor_index, modular_scale};
use crate::constants::{DEFAULT_SPACING_ANCHOR, SPACING_STEPS};
use crate::models::{ResolvedType, Variable, VariableValue};
use crate::path::ResourcePath;
use crate::session::Session;
use crate::store::DocumentStore;
use crate::variables::{get_or_create_variable, set_values};

/// `(step, value)` pairs for a spacing scale anchored at `anchor`.
///
/// # Examples
///
/// ```rust
/// use dsforge::systems::spacing_values;
///
/// let values = spacing_values(16.0, 2.0, None).unwrap();
/// assert_eq!(values[4], ("md", 16.0));
/// assert_eq!(values[5], ("lg", 32.0));
/// ```
pub fn spacing_values(
    base: f64,
    factor: f64,
    anchor: Option<&str>,
) -> Result<Vec<(&'static str, f64)>> {
    let anchor = anchor_index("spacing", &SPACING_STEPS, anchor, DEFAULT_SPACING_ANCHOR)?;
    let values = modular_scale(base, factor, SPACING_STEPS.len(), anchor)?;
    Ok(SPACING_STEPS.into_iter().zip(values).collect())
}

/// Create or update one `FLOAT` variable per spacing step.
///
/// `path` names the collection and an optional folder, so
/// `"Spacing/golden"` yields `golden/3xs` ... `golden/3xl` in the `Spacing`
/// collection. Values land on the collection's first mode.
pub async fn spacing_system<S: DocumentStore>(
    session: &mut Session<S>,
    path: &str,
    base: f64,
    factor: f64,
    anchor: Option<&str>,
) -> Result<Vec<Variable>> {
    let parsed = ResourcePath::parse(path)?;
    let values = spacing_values(base, factor, anchor)?;

    let collection = session.collections().get(&parsed.namespace).await?;
    tracing::debug!("Creating spacing system: {path} with {} variables", values.len());

    let mut variables = Vec::with_capacity(values.len());
    for (step, value) in values {
        let name = parsed.qualify(step);
        let variable =
            get_or_create_variable(session.store(), &name, &collection, ResolvedType::Float)
                .await?;
        let variable =
            set_values(session.store(), variable, &collection, vec![VariableValue::Float(value)])
                .await?;
        variables.push(variable);
    }

    tracing::info!("Created spacing system {path} ({factor} from {base})");
    Ok(variables)
}
