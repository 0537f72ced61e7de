#![forbid(unsafe_code)]

//! Construction-time configuration for a circle view.
//!
//! Every field is optional in serialized form; missing fields take the
//! defaults below. Colors are hex strings (`"#RRGGBB"` or `"#AARRGGBB"`),
//! dimensions are strings with a unit suffix (`"2dp"`, `"3px"`).
//!
//! ```json
//! { "borderWidth": "3dp", "borderColor": "#FF000000", "initials": "JD" }
//! ```

use std::fmt;

use circlet_core::Dimension;
use circlet_style::{Argb, DEFAULT_INITIALS};
use serde::{Deserialize, Serialize};

/// Default ring width in density-independent units.
pub const DEFAULT_BORDER_WIDTH_DP: f32 = 2.0;

/// Default proposed side length in density-independent units.
pub const DEFAULT_SIZE_DP: f32 = 40.0;

/// Options read once when a view is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CircleConfig {
    /// Ring stroke width.
    pub border_width: Dimension,
    /// Ring stroke color.
    pub border_color: Argb,
    /// Initials shown when no image is displayed.
    pub initials: String,
    /// Explicit size; the view never proposes less than this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Dimension>,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            border_width: Dimension::Dp(DEFAULT_BORDER_WIDTH_DP),
            border_color: Argb::WHITE,
            initials: DEFAULT_INITIALS.to_owned(),
            size: None,
        }
    }
}

impl CircleConfig {
    /// Parse a config from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_border_width(mut self, width: Dimension) -> Self {
        self.border_width = width;
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: Argb) -> Self {
        self.border_color = color;
        self
    }

    #[must_use]
    pub fn with_initials(mut self, initials: impl Into<String>) -> Self {
        self.initials = initials.into();
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: Dimension) -> Self {
        self.size = Some(size);
        self
    }
}

/// Errors raised while loading a [`CircleConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// Malformed JSON, or a field whose value does not parse.
    Json(serde_json::Error),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid circle config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}
