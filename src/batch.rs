//! Batch generation of a whole icon set onto disk.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{IconError, Result};
use crate::icon::IconSpec;
use crate::profile::IconProfile;
use crate::renderer::IconRenderer;

// ============================================================================
// IconBatch
// ============================================================================

/// Renders every icon of a profile and writes it under one directory.
///
/// Runs are sequential and stop at the first error. Output names are
/// deterministic, so a second run overwrites the same files.
///
/// # Example
///
/// ```no_run
/// use pagepause_icons::IconBatch;
///
/// let report = IconBatch::with_defaults("icons").run().unwrap();
/// assert_eq!(report.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct IconBatch {
    profile: IconProfile,
    renderer: IconRenderer,
    out_dir: PathBuf,
}

impl IconBatch {
    /// Validates `profile` and prepares a batch writing into `out_dir`.
    pub fn new(profile: IconProfile, out_dir: impl Into<PathBuf>) -> Result<Self> {
        profile.validate()?;
        let renderer = IconRenderer::new(profile.resolve_colors()?);
        Ok(Self {
            profile,
            renderer,
            out_dir: out_dir.into(),
        })
    }

    /// The stock icon set: eight standard sizes and two maskable ones.
    pub fn with_defaults(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            profile: IconProfile::default(),
            renderer: IconRenderer::default(),
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn profile(&self) -> &IconProfile {
        &self.profile
    }

    /// Icons this batch will produce, in generation order.
    pub fn specs(&self) -> Vec<IconSpec> {
        self.profile.specs()
    }

    /// Where the icon for `spec` is written.
    pub fn output_path(&self, spec: &IconSpec) -> PathBuf {
        self.out_dir.join(spec.file_name())
    }

    /// Generates every icon.
    pub fn run(&self) -> Result<GenerationReport> {
        self.run_with(|_| {})
    }

    /// Generates every icon, calling `on_written` after each file lands.
    pub fn run_with<F>(&self, mut on_written: F) -> Result<GenerationReport>
    where
        F: FnMut(&GeneratedIcon),
    {
        std::fs::create_dir_all(&self.out_dir).map_err(|e| IconError::io(&self.out_dir, e))?;

        let specs = self.specs();
        info!(
            count = specs.len(),
            out_dir = %self.out_dir.display(),
            "generating icon set"
        );

        let mut report = GenerationReport::new(manifest_prefix(&self.out_dir));
        for spec in specs {
            let icon = self.renderer.render(spec)?;
            let path = self.output_path(&spec);
            icon.save_png(&path)?;
            debug!(path = %path.display(), "wrote icon");

            let generated = GeneratedIcon { spec, path };
            on_written(&generated);
            report.icons.push(generated);
        }

        info!(count = report.len(), "icon set complete");
        Ok(report)
    }
}

/// Manifest `src` prefix: the output directory's own name.
fn manifest_prefix(out_dir: &Path) -> String {
    out_dir
        .file_name()
        .map(|name| format!("{}/", name.to_string_lossy()))
        .unwrap_or_default()
}

// ============================================================================
// Report
// ============================================================================

/// One file written by a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub spec: IconSpec,
    pub path: PathBuf,
}

/// What a batch run produced, in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationReport {
    pub icons: Vec<GeneratedIcon>,
    src_prefix: String,
}

impl GenerationReport {
    fn new(src_prefix: String) -> Self {
        Self {
            icons: Vec::new(),
            src_prefix,
        }
    }

    /// Number of files written.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedIcon> {
        self.icons.iter()
    }

    /// The `icons` array of a web app manifest describing these files.
    pub fn manifest_icons(&self) -> Vec<ManifestIcon> {
        self.icons
            .iter()
            .map(|icon| ManifestIcon {
                src: format!("{}{}", self.src_prefix, icon.spec.file_name()),
                sizes: icon.spec.sizes_attr(),
                mime_type: "image/png".into(),
                purpose: icon.spec.variant.purpose().into(),
            })
            .collect()
    }

    /// [`manifest_icons`](Self::manifest_icons) as pretty-printed JSON.
    pub fn manifest_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.manifest_icons())
    }
}

impl<'a> IntoIterator for &'a GenerationReport {
    type Item = &'a GeneratedIcon;
    type IntoIter = std::slice::Iter<'a, GeneratedIcon>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.iter()
    }
}

/// A web app manifest icon entry.
///
/// ```json
/// { "src": "icons/icon-192.png", "sizes": "192x192", "type": "image/png", "purpose": "any" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub purpose: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_batch_plans_ten_icons() {
        let batch = IconBatch::with_defaults("icons");
        let specs = batch.specs();

        assert_eq!(specs.len(), 10);
        assert_eq!(specs.iter().filter(|s| s.is_maskable()).count(), 2);
        assert_eq!(
            batch.output_path(&IconSpec::maskable(192)),
            Path::new("icons/icon-maskable-192.png")
        );
        assert_eq!(
            batch.output_path(&IconSpec::standard(144)),
            Path::new("icons/icon-144.png")
        );
    }

    #[test]
    fn new_rejects_invalid_profile() {
        let profile = IconProfile::new().with_sizes(vec![0]);
        assert!(IconBatch::new(profile, "icons").is_err());
    }

    #[test]
    fn manifest_prefix_uses_directory_name() {
        assert_eq!(manifest_prefix(Path::new("public/icons")), "icons/");
        assert_eq!(manifest_prefix(Path::new("assets")), "assets/");
        assert_eq!(manifest_prefix(Path::new("/")), "");
    }

    #[test]
    fn manifest_entries_follow_report() {
        let mut report = GenerationReport::new("icons/".into());
        for spec in [IconSpec::standard(72), IconSpec::maskable(512)] {
            report.icons.push(GeneratedIcon {
                path: PathBuf::from("icons").join(spec.file_name()),
                spec,
            });
        }

        let icons = report.manifest_icons();
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0].src, "icons/icon-72.png");
        assert_eq!(icons[0].sizes, "72x72");
        assert_eq!(icons[0].purpose, "any");
        assert_eq!(icons[1].src, "icons/icon-maskable-512.png");
        assert_eq!(icons[1].purpose, "maskable");

        let json = report.manifest_json().unwrap();
        assert!(json.contains("\"type\": \"image/png\""));
    }
}
