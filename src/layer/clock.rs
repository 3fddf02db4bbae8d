//! Clock badge drawn over the book's top-right corner.

use super::{raster, DrawContext, IconLayer};
use crate::error::{IconError, Result};

pub const CLOCK_CENTER: (f32, f32) = (38.0, 10.0);
pub const CLOCK_RADIUS: f32 = 7.0;

/// Length of the vertical hand, pointing up.
pub const MINUTE_HAND_LENGTH: f32 = 4.0;
/// Length of the horizontal hand, pointing right.
pub const HOUR_HAND_LENGTH: f32 = 3.0;

pub const CENTER_DOT_RADIUS: f32 = 1.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct ClockLayer;

impl IconLayer for ClockLayer {
    fn draw(&self, ctx: &mut DrawContext) -> Result<()> {
        let grid = ctx.grid;
        let colors = ctx.colors;
        let widths = ctx.widths;

        let (cx, cy) = grid.point(CLOCK_CENTER);

        let badge = raster::circle((cx, cy), grid.length(CLOCK_RADIUS))
            .ok_or(IconError::Geometry("clock badge"))?;
        ctx.canvas.fill_path(&badge, colors.clock);
        ctx.canvas.stroke_path(&badge, colors.foreground, widths.outline);

        let minute = raster::line((cx, cy), (cx, cy - grid.length(MINUTE_HAND_LENGTH)))
            .ok_or(IconError::Geometry("minute hand"))?;
        ctx.canvas.stroke_path(&minute, colors.foreground, widths.hand);

        let hour = raster::line((cx, cy), (cx + grid.length(HOUR_HAND_LENGTH), cy))
            .ok_or(IconError::Geometry("hour hand"))?;
        ctx.canvas.stroke_path(&hour, colors.foreground, widths.hand);

        let dot = raster::circle((cx, cy), widths.dot_radius)
            .ok_or(IconError::Geometry("clock center"))?;
        ctx.canvas.fill_path(&dot, colors.foreground);

        Ok(())
    }
}
