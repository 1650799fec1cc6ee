//! Global constants used throughout dsforge.
//!
//! Scale step names, anchors, and typography defaults shared by the
//! generators and the configuration layer.

/// Spacing scale steps, smallest first.
pub const SPACING_STEPS: [&str; 9] = ["3xs", "2xs", "xs", "sm", "md", "lg", "xl", "2xl", "3xl"];

/// Step that receives the base value when no spacing anchor is given.
pub const DEFAULT_SPACING_ANCHOR: &str = "md";

/// Typography scale steps, smallest first.
pub const TYPOGRAPHY_STEPS: [&str; 9] = ["xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl"];

/// Step that receives the base size when no typography anchor is given.
pub const DEFAULT_TYPOGRAPHY_ANCHOR: &str = "base";

/// Default font family for generated text styles.
pub const DEFAULT_FONT_FAMILY: &str = "Inter";

/// Default font style for generated text styles.
pub const DEFAULT_FONT_STYLE: &str = "Regular";

/// Font families tried, in order, when a requested font cannot be loaded.
pub const FALLBACK_FONT_FAMILIES: [&str; 4] = ["Inter", "Roboto", "Arial", "Helvetica"];

/// Line height, in percent, applied to generated typography scale steps.
pub const DEFAULT_LINE_HEIGHT_PERCENT: f64 = 140.0;

/// Name of the single mode a freshly created collection starts with.
pub const DEFAULT_MODE_NAME: &str = "Mode 1";

/// Scale name under which semantic text styles are reported.
pub const SEMANTIC_SCALE: &str = "semantic";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV_VAR: &str = "DSFORGE_CONFIG";

/// Document file used when neither the CLI nor the config names one.
pub const DEFAULT_DOCUMENT_FILE: &str = "design-document.json";
