//! Icon rendering entry point.

use tracing::debug;

use crate::colors::IconColors;
use crate::error::Result;
use crate::icon::{IconSpec, RenderedIcon};
use crate::layer::{DrawContext, LayerStack};

// ============================================================================
// IconRenderer
// ============================================================================

/// Draws the book-and-clock icon at any size.
///
/// Rendering is a pure function of the spec and the renderer's colors: the
/// same inputs always produce the same pixels. Each call draws into a fresh
/// buffer.
///
/// # Example
///
/// ```
/// use pagepause_icons::{IconRenderer, IconSpec};
///
/// let renderer = IconRenderer::default();
/// let icon = renderer.render(IconSpec::maskable(192)).unwrap();
///
/// assert_eq!(icon.dimensions().width, 192);
/// assert_eq!(icon.dimensions().height, 192);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconRenderer {
    colors: IconColors,
    layers: LayerStack,
}

impl IconRenderer {
    /// Creates a renderer that paints with the given colors.
    pub fn new(colors: IconColors) -> Self {
        Self {
            colors,
            layers: LayerStack::default(),
        }
    }

    pub fn colors(&self) -> &IconColors {
        &self.colors
    }

    /// Renders a single icon.
    ///
    /// Fails with [`IconError::InvalidSize`](crate::IconError::InvalidSize)
    /// for a zero or unallocatable edge length.
    pub fn render(&self, spec: IconSpec) -> Result<RenderedIcon> {
        let mut ctx = DrawContext::new(spec, self.colors)?;
        debug!(
            size = spec.size,
            variant = ?spec.variant,
            scale = ctx.grid.scale,
            offset = ctx.grid.offset,
            outline = ctx.widths.outline,
            hand = ctx.widths.hand,
            "rendering icon"
        );

        self.layers.draw(&mut ctx)?;

        Ok(RenderedIcon::new(ctx.canvas.into_rgba_image(), spec))
    }

    /// Renders every spec in order, stopping at the first failure.
    pub fn render_all<'a>(
        &self,
        specs: impl IntoIterator<Item = &'a IconSpec>,
    ) -> Result<Vec<RenderedIcon>> {
        specs.into_iter().map(|spec| self.render(*spec)).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
