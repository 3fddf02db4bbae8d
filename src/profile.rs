//! Serializable icon-set profile.
//!
//! An [`IconProfile`] captures which sizes to generate and which colors to
//! paint with, in a JSON-friendly format. Every field is optional; anything
//! left out falls back to the stock icon set.
//!
//! # Example
//!
//! ```
//! use pagepause_icons::IconProfile;
//!
//! let profile = IconProfile::from_json(r##"{ "maskableSizes": [512] }"##).unwrap();
//! assert_eq!(profile.maskable_sizes, vec![512]);
//! assert_eq!(profile.sizes.len(), 8);
//!
//! let colors = profile.resolve_colors().unwrap();
//! let json = profile.to_json().unwrap();
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colors::{parse_hex, to_hex, IconColors};
use crate::error::{IconError, Result};
use crate::icon::IconSpec;

/// Edge lengths of the standard icons.
pub const DEFAULT_SIZES: &[u32] = &[72, 96, 128, 144, 152, 192, 384, 512];

/// Edge lengths of the maskable icons.
pub const DEFAULT_MASKABLE_SIZES: &[u32] = &[192, 512];

// ============================================================================
// Color Settings (Serializable)
// ============================================================================

/// Serializable version of [`IconColors`], as hex strings.
///
/// ```json
/// { "background": "#1a4d3e", "book": "#4a9d7f", "clock": "#ff9800", "foreground": "#ffffff" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorSettings {
    pub background: String,
    pub book: String,
    pub clock: String,
    pub foreground: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        (&IconColors::default()).into()
    }
}

impl From<&IconColors> for ColorSettings {
    fn from(colors: &IconColors) -> Self {
        Self {
            background: to_hex(colors.background),
            book: to_hex(colors.book),
            clock: to_hex(colors.clock),
            foreground: to_hex(colors.foreground),
        }
    }
}

impl TryFrom<&ColorSettings> for IconColors {
    type Error = IconError;

    fn try_from(settings: &ColorSettings) -> Result<Self> {
        Ok(Self {
            background: parse_hex(&settings.background)?,
            book: parse_hex(&settings.book)?,
            clock: parse_hex(&settings.clock)?,
            foreground: parse_hex(&settings.foreground)?,
        })
    }
}

// ============================================================================
// IconProfile
// ============================================================================

/// Sizes and colors for one generated icon set.
///
/// # JSON Format
///
/// ```json
/// {
///   "sizes": [72, 96, 128, 144, 152, 192, 384, 512],
///   "maskableSizes": [192, 512],
///   "colors": {
///     "background": "#1a4d3e",
///     "book": "#4a9d7f",
///     "clock": "#ff9800",
///     "foreground": "#ffffff"
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconProfile {
    /// Edge lengths of the standard (rounded) icons.
    pub sizes: Vec<u32>,

    /// Edge lengths of the maskable icons.
    pub maskable_sizes: Vec<u32>,

    pub colors: ColorSettings,
}

impl Default for IconProfile {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            maskable_sizes: DEFAULT_MASKABLE_SIZES.to_vec(),
            colors: ColorSettings::default(),
        }
    }
}

impl IconProfile {
    /// Creates the stock profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the standard icon sizes.
    pub fn with_sizes(mut self, sizes: impl Into<Vec<u32>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Replaces the maskable icon sizes.
    pub fn with_maskable_sizes(mut self, sizes: impl Into<Vec<u32>>) -> Self {
        self.maskable_sizes = sizes.into();
        self
    }

    pub fn with_colors(mut self, colors: &IconColors) -> Self {
        self.colors = colors.into();
        self
    }

    /// Every icon this profile describes: standard sizes first, then
    /// maskable, each in list order.
    pub fn specs(&self) -> Vec<IconSpec> {
        self.sizes
            .iter()
            .map(|&size| IconSpec::standard(size))
            .chain(self.maskable_sizes.iter().map(|&size| IconSpec::maskable(size)))
            .collect()
    }

    /// Parses the color settings.
    pub fn resolve_colors(&self) -> Result<IconColors> {
        IconColors::try_from(&self.colors)
    }

    /// Checks the size lists and colors.
    ///
    /// Rejects zero sizes, duplicates within a list (two specs would share
    /// one file) and a profile that would generate nothing.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() && self.maskable_sizes.is_empty() {
            return Err(IconError::Profile("no icon sizes configured".into()));
        }

        for (label, sizes) in [("sizes", &self.sizes), ("maskableSizes", &self.maskable_sizes)] {
            let mut seen = HashSet::new();
            for &size in sizes {
                if size == 0 {
                    return Err(IconError::InvalidSize { size });
                }
                if !seen.insert(size) {
                    return Err(IconError::Profile(format!(
                        "duplicate size {size} in {label}"
                    )));
                }
            }
        }

        self.resolve_colors().map(|_| ())
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads, parses and validates a profile file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| IconError::io(path, e))?;
        let profile = Self::from_json(&json)
            .map_err(|e| IconError::Profile(format!("{}: {e}", path.display())))?;
        profile.validate()?;
        Ok(profile)
    }
}

// ============================================================================
// Tests
// ============================================================================
