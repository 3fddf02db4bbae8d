//! Color palette for the book-and-clock artwork.

use std::str::FromStr;

use palette::Srgb;

use crate::error::{IconError, Result};

/// The four flat colors the icon is painted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconColors {
    /// Background square.
    pub background: Srgb<u8>,
    /// Book pages.
    pub book: Srgb<u8>,
    /// Clock badge.
    pub clock: Srgb<u8>,
    /// Outlines, ruled lines, spine and clock hands.
    pub foreground: Srgb<u8>,
}

impl Default for IconColors {
    fn default() -> Self {
        Self {
            background: Srgb::new(26, 77, 62),
            book: Srgb::new(74, 157, 127),
            clock: Srgb::new(255, 152, 0),
            foreground: Srgb::new(255, 255, 255),
        }
    }
}

/// Parses `#rrggbb`, `rrggbb` or the three-digit short forms.
pub fn parse_hex(value: &str) -> Result<Srgb<u8>> {
    Srgb::<u8>::from_str(value.trim())
        .map_err(|e| IconError::Profile(format!("invalid color {value:?}: {e}")))
}

/// Formats a color as lowercase `#rrggbb`.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}
