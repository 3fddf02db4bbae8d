use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use pagepause_icons::{IconBatch, IconError, IconProfile};

struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(tag: &str) -> Self {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "pagepause-icons-{tag}-{}-{stamp}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn icons(&self) -> PathBuf {
        self.0.join("icons")
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn file_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

fn expected_names() -> BTreeSet<String> {
    [72, 96, 128, 144, 152, 192, 384, 512]
        .iter()
        .map(|s| format!("icon-{s}.png"))
        .chain([192, 512].iter().map(|s| format!("icon-maskable-{s}.png")))
        .collect()
}

#[test]
fn default_run_writes_ten_decodable_icons() {
    let scratch = ScratchDir::new("e2e");
    let out = scratch.icons();

    let mut confirmed = Vec::new();
    let report = IconBatch::with_defaults(&out)
        .run_with(|icon| confirmed.push(icon.path.clone()))
        .unwrap();

    assert_eq!(report.len(), 10);
    assert_eq!(confirmed.len(), 10);
    assert_eq!(file_names(&out), expected_names());

    for generated in &report {
        assert!(generated.path.starts_with(&out));
        let img = image::open(&generated.path).unwrap();
        assert_eq!(img.width(), generated.spec.size);
        assert_eq!(img.height(), generated.spec.size);
    }
}

#[test]
fn second_run_overwrites_same_files() {
    let scratch = ScratchDir::new("idempotent");
    let out = scratch.icons();
    let batch = IconBatch::with_defaults(&out);

    batch.run().unwrap();
    let first = fs::read(out.join("icon-maskable-192.png")).unwrap();

    let report = batch.run().unwrap();
    assert_eq!(report.len(), 10);
    assert_eq!(file_names(&out), expected_names());

    let second = fs::read(out.join("icon-maskable-192.png")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn existing_directory_is_reused() {
    let scratch = ScratchDir::new("existing");
    let out = scratch.icons();
    fs::create_dir_all(&out).unwrap();

    let report = IconBatch::with_defaults(&out).run().unwrap();
    assert_eq!(report.len(), 10);
}

#[test]
fn written_png_matches_filename_variant() {
    let scratch = ScratchDir::new("variant");
    let out = scratch.icons();
    IconBatch::with_defaults(&out).run().unwrap();

    let standard = image::open(out.join("icon-512.png")).unwrap().to_rgba8();
    let maskable = image::open(out.join("icon-maskable-512.png")).unwrap().to_rgba8();

    assert_eq!(standard.get_pixel(0, 0)[3], 0);
    assert_eq!(maskable.get_pixel(0, 0)[3], 255);
}

#[test]
fn custom_profile_controls_output() {
    let scratch = ScratchDir::new("profile");
    let profile_path = scratch.0.join("profile.json");
    fs::write(
        &profile_path,
        r##"{ "sizes": [48, 64], "maskableSizes": [], "colors": { "background": "#000000" } }"##,
    )
    .unwrap();

    let profile = IconProfile::load(&profile_path).unwrap();
    let out = scratch.icons();
    let report = IconBatch::new(profile, &out).unwrap().run().unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(
        file_names(&out),
        BTreeSet::from(["icon-48.png".to_string(), "icon-64.png".to_string()])
    );

    let img = image::open(out.join("icon-64.png")).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(32, 1).0, [0, 0, 0, 255]);
}

#[test]
fn manifest_lists_every_icon() {
    let scratch = ScratchDir::new("manifest");
    let report = IconBatch::with_defaults(scratch.icons()).run().unwrap();

    let json = report.manifest_json().unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();

    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0]["src"], "icons/icon-72.png");
    assert_eq!(entries[0]["sizes"], "72x72");
    assert_eq!(entries[0]["type"], "image/png");
    assert_eq!(entries[0]["purpose"], "any");
    assert_eq!(entries[9]["src"], "icons/icon-maskable-512.png");
    assert_eq!(entries[9]["purpose"], "maskable");
}

#[test]
fn unwritable_output_aborts_run() {
    let scratch = ScratchDir::new("blocked");
    let blocker = scratch.0.join("icons");
    fs::write(&blocker, b"not a directory").unwrap();

    let err = IconBatch::with_defaults(&blocker).run().unwrap_err();
    assert!(matches!(err, IconError::Io { .. }));
    assert!(blocker.is_file());
}
