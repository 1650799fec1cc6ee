//! Color literal parsing.

use regex::Regex;
use std::sync::OnceLock;

use crate::core::DsforgeError;
use crate::models::Rgb;

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$")
            .unwrap_or_else(|e| panic!("hex color pattern is valid: {e}"))
    })
}

/// Parse `#RRGGBB` into channels in `0.0..=1.0`.
///
/// # Examples
///
/// ```rust
/// use dsforge::variables::hex_to_rgb;
///
/// let rgb = hex_to_rgb("#FF8000").unwrap();
/// assert_eq!(rgb.r, 1.0);
/// assert!(hex_to_rgb("#F80").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, DsforgeError> {
    let invalid = || DsforgeError::InvalidColor {
        value: hex.to_string(),
    };

    let captures = hex_pattern().captures(hex).ok_or_else(invalid)?;
    let channel = |i: usize| -> Result<f64, DsforgeError> {
        let digits = captures.get(i).ok_or_else(invalid)?.as_str();
        let value = u8::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Ok(f64::from(value) / 255.0)
    };

    Ok(Rgb {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
    })
}

/// Convert 0–255 channels to a color.
#[must_use]
pub fn rgb_from_bytes([r, g, b]: [u8; 3]) -> Rgb {
    Rgb {
        r: f64::from(r) / 255.0,
        g: f64::from(g) / 255.0,
        b: f64::from(b) / 255.0,
    }
}
