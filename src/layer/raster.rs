//! Rasterization helpers on top of tiny-skia.
//!
//! Layers build paths in pixel space with the functions here and paint them
//! onto a [`Canvas`]. All painting is anti-aliased and uses flat colors.

use image::RgbaImage;
use palette::Srgb;
use resvg::tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::error::{IconError, Result};

/// Control-point distance for approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_8;

// ============================================================================
// Canvas
// ============================================================================

/// A square RGBA drawing surface, transparent when created.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocates a transparent `size x size` canvas.
    pub fn new(size: u32) -> Result<Self> {
        Pixmap::new(size, size)
            .map(|pixmap| Self { pixmap })
            .ok_or(IconError::InvalidSize { size })
    }

    /// Edge length in pixels.
    pub fn size(&self) -> f32 {
        self.pixmap.width() as f32
    }

    /// Fills every pixel, replacing what was there.
    pub fn fill_all(&mut self, color: Srgb<u8>) {
        self.pixmap
            .fill(Color::from_rgba8(color.red, color.green, color.blue, 255));
    }

    pub fn fill_path(&mut self, path: &Path, color: Srgb<u8>) {
        self.pixmap.fill_path(
            path,
            &solid_paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Strokes `path` centered on its outline with butt caps and round joins.
    pub fn stroke_path(&mut self, path: &Path, color: Srgb<u8>, width: f32) {
        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            path,
            &solid_paint(color),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    /// Converts the premultiplied pixmap into a straight-alpha image.
    pub fn into_rgba_image(self) -> RgbaImage {
        let width = self.pixmap.width();
        let height = self.pixmap.height();
        let mut img = RgbaImage::new(width, height);

        for (dst, src) in img.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            dst.0 = [c.red(), c.green(), c.blue(), c.alpha()];
        }

        img
    }
}

fn solid_paint(color: Srgb<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.red, color.green, color.blue, 255);
    paint.anti_alias = true;
    paint
}

// ============================================================================
// Paths
// ============================================================================

/// A square anchored at the origin with circular corners of `radius`.
pub fn rounded_square(size: f32, radius: f32) -> Option<Path> {
    let r = radius.clamp(0.0, size / 2.0);
    if r == 0.0 {
        return square(size);
    }
    let k = r * KAPPA;
    let far = size - r;

    let mut pb = PathBuilder::new();
    pb.move_to(r, 0.0);
    pb.line_to(far, 0.0);
    pb.cubic_to(far + k, 0.0, size, r - k, size, r);
    pb.line_to(size, far);
    pb.cubic_to(size, far + k, far + k, size, far, size);
    pb.line_to(r, size);
    pb.cubic_to(r - k, size, 0.0, far + k, 0.0, far);
    pb.line_to(0.0, r);
    pb.cubic_to(0.0, r - k, r - k, 0.0, r, 0.0);
    pb.close();
    pb.finish()
}

/// A square anchored at the origin.
pub fn square(size: f32) -> Option<Path> {
    Rect::from_xywh(0.0, 0.0, size, size).map(PathBuilder::from_rect)
}

/// A closed polygon through `points`.
pub fn polygon(points: impl IntoIterator<Item = (f32, f32)>) -> Option<Path> {
    let mut pb = PathBuilder::new();
    let mut points = points.into_iter();
    let (x, y) = points.next()?;
    pb.move_to(x, y);
    for (x, y) in points {
        pb.line_to(x, y);
    }
    pb.close();
    pb.finish()
}

/// A single straight segment.
pub fn line(from: (f32, f32), to: (f32, f32)) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(from.0, from.1);
    pb.line_to(to.0, to.1);
    pb.finish()
}

pub fn circle(center: (f32, f32), radius: f32) -> Option<Path> {
    PathBuilder::from_circle(center.0, center.1, radius)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Srgb<u8> = Srgb::new(255, 0, 0);

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = Canvas::new(8).unwrap();
        let img = canvas.into_rgba_image();
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn zero_size_canvas_is_rejected() {
        assert!(matches!(
            Canvas::new(0),
            Err(IconError::InvalidSize { size: 0 })
        ));
    }

    #[test]
    fn fill_all_is_opaque() {
        let mut canvas = Canvas::new(4).unwrap();
        canvas.fill_all(RED);
        let img = canvas.into_rgba_image();
        assert!(img.pixels().all(|p| p.0 == [255, 0, 0, 255]));
    }

    #[test]
    fn rounded_square_leaves_corners_clear() {
        let mut canvas = Canvas::new(40).unwrap();
        let path = rounded_square(40.0, 10.0).unwrap();
        canvas.fill_path(&path, RED);
        let img = canvas.into_rgba_image();

        for (x, y) in [(0, 0), (39, 0), (0, 39), (39, 39)] {
            assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({x}, {y})");
        }
        assert_eq!(img.get_pixel(20, 20).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(20, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn polygon_needs_a_point() {
        assert!(polygon(std::iter::empty()).is_none());
        assert!(polygon([(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)]).is_some());
    }

    #[test]
    fn stroke_covers_line() {
        let mut canvas = Canvas::new(10).unwrap();
        let path = line((0.0, 5.0), (10.0, 5.0)).unwrap();
        canvas.stroke_path(&path, RED, 2.0);
        let img = canvas.into_rgba_image();

        assert_eq!(img.get_pixel(5, 4).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(5, 5).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(5, 0)[3], 0);
    }
}
