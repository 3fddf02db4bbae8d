//! Layer infrastructure for drawing the icon.
//!
//! The artwork is authored on a fixed 48×48 logical grid. Each layer maps its
//! logical coordinates through a [`GridTransform`] and paints onto a shared
//! [`Canvas`]. Layers are applied in a fixed order by [`LayerStack`]:
//!
//! ```text
//! ┌────────────┐
//! │ Background │ ◄── rounded square, or full bleed when maskable
//! └─────┬──────┘
//!       ▼
//! ┌────────────┐
//! │    Book    │ ◄── pages, spine, ruled lines
//! └─────┬──────┘
//!       ▼
//! ┌────────────┐
//! │   Clock    │ ◄── badge, hands, center dot
//! └────────────┘
//! ```

pub mod background;
pub mod book;
pub mod clock;
pub mod raster;

pub use background::BackgroundLayer;
pub use book::BookLayer;
pub use clock::ClockLayer;
pub use raster::Canvas;

use crate::colors::IconColors;
use crate::error::Result;
use crate::icon::IconSpec;

/// Edge length of the logical design grid.
pub const GRID_UNITS: f32 = 48.0;

// ============================================================================
// Grid Transform
// ============================================================================

/// Maps logical grid coordinates to pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTransform {
    /// Pixels per logical unit.
    pub scale: f32,
    /// Pixel offset added to every mapped coordinate.
    pub offset: f32,
}

impl GridTransform {
    /// Builds the transform for an icon spec.
    ///
    /// Maskable icons shrink the drawable area by the safe-zone padding and
    /// shift it inwards by half of it.
    pub fn for_spec(spec: &IconSpec) -> Self {
        let offset = spec.inset();
        let drawable = spec.size as f32 - offset * 2.0;
        Self {
            scale: drawable / GRID_UNITS,
            offset,
        }
    }

    /// Maps a single logical coordinate.
    pub fn coord(&self, value: f32) -> f32 {
        value * self.scale + self.offset
    }

    /// Maps a logical point.
    pub fn point(&self, (x, y): (f32, f32)) -> (f32, f32) {
        (self.coord(x), self.coord(y))
    }

    /// Maps a logical length (radius, hand length). No offset is applied.
    pub fn length(&self, value: f32) -> f32 {
        value * self.scale
    }
}

// ============================================================================
// Stroke Widths
// ============================================================================

/// Pixel stroke widths for one icon size.
///
/// Widths scale with the grid and are truncated to whole pixels, then clamped
/// so strokes stay visible at the smallest sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeWidths {
    /// Page outlines, spine and badge outline.
    pub outline: f32,
    /// Ruled lines on the pages.
    pub rule: f32,
    /// Clock hands.
    pub hand: f32,
    /// Radius of the clock's center dot.
    pub dot_radius: f32,
}

impl StrokeWidths {
    pub const MIN_OUTLINE: f32 = 2.0;
    pub const MIN_RULE: f32 = 1.0;
    pub const MIN_HAND: f32 = 2.0;
    pub const MIN_DOT_RADIUS: f32 = 1.0;

    pub fn for_scale(scale: f32) -> Self {
        Self {
            outline: (2.0 * scale).floor().max(Self::MIN_OUTLINE),
            rule: scale.floor().max(Self::MIN_RULE),
            hand: (2.0 * scale).floor().max(Self::MIN_HAND),
            dot_radius: (clock::CENTER_DOT_RADIUS * scale).max(Self::MIN_DOT_RADIUS),
        }
    }
}

// ============================================================================
// Draw Context
// ============================================================================

/// Everything a layer needs to paint itself.
pub struct DrawContext {
    /// The raster being drawn into.
    pub canvas: Canvas,
    pub spec: IconSpec,
    pub grid: GridTransform,
    pub widths: StrokeWidths,
    pub colors: IconColors,
}

impl DrawContext {
    /// Allocates a transparent canvas for `spec`.
    pub fn new(spec: IconSpec, colors: IconColors) -> Result<Self> {
        let grid = GridTransform::for_spec(&spec);
        Ok(Self {
            canvas: Canvas::new(spec.size)?,
            spec,
            grid,
            widths: StrokeWidths::for_scale(grid.scale),
            colors,
        })
    }
}

// ============================================================================
// Layer Trait
// ============================================================================

/// A self-contained part of the artwork.
pub trait IconLayer {
    /// Paints this layer on top of whatever is already on the canvas.
    fn draw(&self, ctx: &mut DrawContext) -> Result<()>;
}

/// The fixed drawing order: background, then book, then clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerStack {
    pub background: BackgroundLayer,
    pub book: BookLayer,
    pub clock: ClockLayer,
}

impl LayerStack {
    /// Draws every layer in order.
    pub fn draw(&self, ctx: &mut DrawContext) -> Result<()> {
        self.background.draw(ctx)?;
        self.book.draw(ctx)?;
        self.clock.draw(ctx)?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
