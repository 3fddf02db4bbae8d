//! pagepause-icons: procedural web-app icon set generator
//!
//! This crate draws the PagePause icon (an open book with a clock badge) at
//! any pixel size and writes the full set a web app manifest needs: rounded
//! standard icons plus full-bleed "maskable" variants whose artwork sits
//! inside the safe zone.
//!
//! The artwork is authored on a 48×48 logical grid and rasterized with
//! tiny-skia, so rendering is deterministic and needs no external assets.
//!
//! # Example
//!
//! ```
//! use pagepause_icons::{IconRenderer, IconSpec};
//!
//! let renderer = IconRenderer::default();
//! let icon = renderer.render(IconSpec::standard(72)).unwrap();
//! let png = icon.encode_png().unwrap();
//! assert!(!png.is_empty());
//! ```
//!
//! # Writing an icon set
//!
//! ```no_run
//! use pagepause_icons::{IconBatch, IconProfile};
//!
//! let profile = IconProfile::new().with_maskable_sizes(vec![192, 512]);
//! let batch = IconBatch::new(profile, "icons").unwrap();
//!
//! let report = batch.run_with(|icon| println!("✓ Created {}", icon.path.display())).unwrap();
//! println!("{}", report.manifest_json().unwrap());
//! ```

mod batch;
mod colors;
mod error;
mod icon;
mod layer;
mod profile;
mod renderer;

pub use batch::{GeneratedIcon, GenerationReport, IconBatch, ManifestIcon};
pub use colors::{parse_hex, to_hex, IconColors};
pub use error::{IconError, Result};
pub use icon::{IconSpec, IconVariant, RectPx, RenderedIcon, SizePx, MASKABLE_PADDING};
pub use layer::{GridTransform, StrokeWidths, GRID_UNITS};
pub use profile::{ColorSettings, IconProfile, DEFAULT_MASKABLE_SIZES, DEFAULT_SIZES};
pub use renderer::IconRenderer;
