//! Design-system generators.
//!
//! Each generator turns a handful of parameters into document resources:
//!
//! - [`spacing_system`] - a modular spacing scale of `FLOAT` variables
//! - [`color_token`] - one `COLOR` variable with a value per mode
//! - [`typography_scale`] - a modular scale of text styles
//! - [`create_text_style`] - one text style, with font fallback
//! - [`typography_system`] - several scales plus semantic styles
//! - [`design_system`] - the default spacing, color, and typography set
//!
//! Generators issue their store calls one after another. Two concurrent
//! creates for the same name could both miss and both create, so nothing here
//! fans out.

mod color;
mod design;
pub mod presets;
mod spacing;
mod typography;

pub use color::color_token;
pub use design::{default_typography_system, design_system};
pub use presets::{PRESET_NAMES, preset};
pub use spacing::{spacing_system, spacing_values};
pub use typography::{
    ScaleConfig, TypographyResult, TypographySystemConfig, create_text_style, scale_sizes,
    typography_scale, typography_system,
};

use crate::core::DsforgeError;

/// Position of `anchor` in `steps`, with `None` or `""` meaning `default`.
pub(crate) fn anchor_index(
    scale: &str,
    steps: &[&str],
    anchor: Option<&str>,
    default: &str,
) -> Result<usize, DsforgeError> {
    let anchor = anchor.filter(|a| !a.is_empty()).unwrap_or(default);
    steps.iter().position(|step| *step == anchor).ok_or_else(|| DsforgeError::UnknownAnchor {
        scale: scale.to_string(),
        anchor: anchor.to_string(),
        available: steps.iter().map(|s| (*s).to_string()).collect(),
    })
}

/// `base * factor^(i - anchor)` for every step index `i`.
///
/// `base` must be finite and `factor` finite and positive. A step that
/// overflows to infinity is rejected, since the document cannot store it.
pub(crate) fn modular_scale(
    base: f64,
    factor: f64,
    steps: usize,
    anchor: usize,
) -> Result<Vec<f64>, DsforgeError> {
    let invalid = |name: &str, value: f64, reason: &str| DsforgeError::InvalidNumber {
        name: name.to_string(),
        value,
        reason: reason.to_string(),
    };

    if !base.is_finite() {
        return Err(invalid("base", base, "must be a finite number"));
    }
    if !(factor.is_finite() && factor > 0.0) {
        return Err(invalid("factor", factor, "must be a positive number"));
    }

    (0..steps)
        .map(|i| {
            #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
            let exponent = i as i32 - anchor as i32;
            let value = base * factor.powi(exponent);
            if value.is_finite() {
                Ok(value)
            } else {
                Err(invalid("scale step", value, "base and factor overflow the scale"))
            }
        })
        .collect()
}
