//! Open book: two pages, a spine and ruled lines.

use super::{raster, DrawContext, IconLayer};
use crate::error::{IconError, Result};

/// Left page outline on the logical grid.
pub const LEFT_PAGE: [(f32, f32); 10] = [
    (4.0, 12.0),
    (4.0, 36.0),
    (8.0, 32.0),
    (14.0, 32.0),
    (20.0, 36.0),
    (24.0, 36.0),
    (24.0, 12.0),
    (20.0, 8.0),
    (14.0, 8.0),
    (8.0, 12.0),
];

/// Right page outline on the logical grid.
pub const RIGHT_PAGE: [(f32, f32); 10] = [
    (24.0, 12.0),
    (24.0, 36.0),
    (28.0, 32.0),
    (34.0, 32.0),
    (40.0, 36.0),
    (44.0, 36.0),
    (44.0, 12.0),
    (40.0, 8.0),
    (34.0, 8.0),
    (28.0, 12.0),
];

pub const SPINE: [(f32, f32); 2] = [(24.0, 12.0), (24.0, 36.0)];

/// Vertical positions of the ruled lines, shared by both pages.
pub const RULE_ROWS: [f32; 3] = [18.0, 22.0, 26.0];

/// Horizontal extent of the ruled lines on each page.
pub const RULE_SPANS: [(f32, f32); 2] = [(8.0, 20.0), (28.0, 40.0)];

#[derive(Debug, Clone, Copy, Default)]
pub struct BookLayer;

impl IconLayer for BookLayer {
    fn draw(&self, ctx: &mut DrawContext) -> Result<()> {
        let grid = ctx.grid;
        let colors = ctx.colors;
        let widths = ctx.widths;

        for page in [&LEFT_PAGE, &RIGHT_PAGE] {
            let path = raster::polygon(page.iter().map(|&p| grid.point(p)))
                .ok_or(IconError::Geometry("book page"))?;
            ctx.canvas.fill_path(&path, colors.book);
            ctx.canvas.stroke_path(&path, colors.foreground, widths.outline);
        }

        let spine = raster::line(grid.point(SPINE[0]), grid.point(SPINE[1]))
            .ok_or(IconError::Geometry("spine"))?;
        ctx.canvas.stroke_path(&spine, colors.foreground, widths.outline);

        for (start, end) in RULE_SPANS {
            for y in RULE_ROWS {
                let rule = raster::line(grid.point((start, y)), grid.point((end, y)))
                    .ok_or(IconError::Geometry("ruled line"))?;
                ctx.canvas.stroke_path(&rule, colors.foreground, widths.rule);
            }
        }

        Ok(())
    }
}
