//! Icon types for the generated web-app icon set.
//!
//! An [`IconSpec`] names one output (edge length plus variant), and a
//! [`RenderedIcon`] is the raster produced for it, ready to be encoded.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{IconError, Result};

/// Fraction of the edge length reserved as padding on maskable icons.
///
/// Split evenly between opposite sides, so each side gets half of it.
pub const MASKABLE_PADDING: f32 = 0.2;

/// A rectangle defined in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the image
    pub x: u32,
    /// Y offset from the top edge of the image
    pub y: u32,
    /// Width of the rectangle
    pub width: u32,
    /// Height of the rectangle
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle starting at origin (0, 0) with the given dimensions.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// Which flavour of icon to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconVariant {
    /// Rounded-square icon with transparent corners.
    Standard,
    /// Full-bleed icon with the artwork inset into the safe zone, for hosts
    /// that apply their own mask.
    Maskable,
}

impl IconVariant {
    pub fn is_maskable(self) -> bool {
        matches!(self, Self::Maskable)
    }

    /// The web manifest `purpose` value for this variant.
    pub fn purpose(self) -> &'static str {
        match self {
            Self::Standard => "any",
            Self::Maskable => "maskable",
        }
    }
}

/// One icon to generate: an edge length in pixels and a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconSpec {
    /// Edge length in pixels. Icons are always square.
    pub size: u32,
    pub variant: IconVariant,
}

impl IconSpec {
    pub fn new(size: u32, variant: IconVariant) -> Self {
        Self { size, variant }
    }

    /// A standard (rounded, non-maskable) icon.
    pub fn standard(size: u32) -> Self {
        Self::new(size, IconVariant::Standard)
    }

    /// A maskable icon with safe-zone padding.
    pub fn maskable(size: u32) -> Self {
        Self::new(size, IconVariant::Maskable)
    }

    pub fn is_maskable(&self) -> bool {
        self.variant.is_maskable()
    }

    /// Padding added on each side of the artwork, in pixels.
    pub fn inset(&self) -> f32 {
        if self.is_maskable() {
            self.size as f32 * MASKABLE_PADDING / 2.0
        } else {
            0.0
        }
    }

    /// Deterministic output file name, e.g. `icon-72.png` or
    /// `icon-maskable-512.png`.
    pub fn file_name(&self) -> String {
        match self.variant {
            IconVariant::Standard => format!("icon-{}.png", self.size),
            IconVariant::Maskable => format!("icon-maskable-{}.png", self.size),
        }
    }

    /// The `sizes` string used in web manifests (`"192x192"`).
    pub fn sizes_attr(&self) -> String {
        format!("{0}x{0}", self.size)
    }

    /// The region guaranteed to hold the artwork, rounded to whole pixels.
    ///
    /// For standard icons this is the whole image.
    pub fn safe_zone(&self) -> RectPx {
        let inset = (self.inset().round() as u32).min(self.size / 2);
        let edge = self.size - inset * 2;
        RectPx::new(inset, inset, edge, edge)
    }
}

/// A fully drawn icon held in memory until it is encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedIcon {
    /// The image data in straight (non-premultiplied) RGBA.
    pub data: RgbaImage,

    /// The spec this image was drawn for.
    pub spec: IconSpec,

    /// Region of the image that holds the artwork.
    pub safe_zone: RectPx,
}

impl RenderedIcon {
    pub fn new(data: RgbaImage, spec: IconSpec) -> Self {
        Self {
            data,
            spec,
            safe_zone: spec.safe_zone(),
        }
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Encodes the image as an RGBA8 PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.data
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Encodes the image and writes it to `path`, replacing any existing file.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes).map_err(|e| IconError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_px_edges() {
        let rect = RectPx::new(10, 20, 100, 200);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 220);
        assert_eq!(RectPx::from_size(8, 8), RectPx::new(0, 0, 8, 8));
    }

    #[test]
    fn file_names_follow_variant() {
        assert_eq!(IconSpec::standard(72).file_name(), "icon-72.png");
        assert_eq!(IconSpec::maskable(512).file_name(), "icon-maskable-512.png");
        assert_eq!(IconSpec::maskable(192).sizes_attr(), "192x192");
    }

    #[test]
    fn standard_safe_zone_is_whole_image() {
        let spec = IconSpec::standard(128);
        assert_eq!(spec.inset(), 0.0);
        assert_eq!(spec.safe_zone(), RectPx::from_size(128, 128));
    }

    #[test]
    fn maskable_safe_zone_is_inset_ten_percent() {
        let spec = IconSpec::maskable(512);
        assert!((spec.inset() - 51.2).abs() < 1e-4);

        let zone = spec.safe_zone();
        assert_eq!(zone.x, 51);
        assert_eq!(zone.y, 51);
        assert_eq!(zone.right(), 512 - 51);
        assert_eq!(zone.bottom(), 512 - 51);
    }

    #[test]
    fn variant_purpose() {
        assert_eq!(IconVariant::Standard.purpose(), "any");
        assert_eq!(IconVariant::Maskable.purpose(), "maskable");
        assert!(IconSpec::maskable(192).is_maskable());
        assert!(!IconSpec::standard(192).is_maskable());
    }

    #[test]
    fn encode_png_produces_decodable_image() {
        let icon = RenderedIcon::new(RgbaImage::new(16, 16), IconSpec::standard(16));
        let bytes = icon.encode_png().unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 16);
        assert!(icon.dimensions().is_square());
    }
}
