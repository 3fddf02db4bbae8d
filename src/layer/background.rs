//! Background square.

use super::{raster, DrawContext, IconLayer};
use crate::error::{IconError, Result};

/// Corner radius of the standard background, as a fraction of the edge.
pub const CORNER_RADIUS: f32 = 0.15;

/// Flat background fill.
///
/// Standard icons get a rounded square with transparent corners. Maskable
/// icons are filled edge to edge, since the host clips them itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackgroundLayer;

impl IconLayer for BackgroundLayer {
    fn draw(&self, ctx: &mut DrawContext) -> Result<()> {
        let color = ctx.colors.background;

        if ctx.spec.is_maskable() {
            ctx.canvas.fill_all(color);
            return Ok(());
        }

        let size = ctx.canvas.size();
        let path = raster::rounded_square(size, size * CORNER_RADIUS)
            .ok_or(IconError::Geometry("background"))?;
        ctx.canvas.fill_path(&path, color);
        Ok(())
    }
}
