use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use pagepause_icons::{IconBatch, IconProfile};

#[derive(Parser)]
#[command(
    name = "pagepause-icons",
    version,
    about = "Generate the PagePause web app icon set"
)]
struct Cli {
    /// Directory the icons are written to
    #[arg(long, default_value = "icons")]
    out_dir: PathBuf,

    /// JSON profile overriding sizes and colors
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Also write the web manifest `icons` array to this file
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Log rendering details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("pagepause_icons={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let profile = match &cli.profile {
        Some(path) => IconProfile::load(path)
            .with_context(|| format!("loading profile {}", path.display()))?,
        None => IconProfile::default(),
    };
    debug!(?profile, "using profile");

    let batch = IconBatch::new(profile, &cli.out_dir).context("invalid icon profile")?;
    let report = batch
        .run_with(|icon| println!("✓ Created {}", icon.path.display()))
        .context("generating icons")?;

    if let Some(path) = &cli.manifest {
        let json = report.manifest_json().context("serializing manifest icons")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing manifest {}", path.display()))?;
        println!("✓ Wrote manifest icons to {}", path.display());
    }

    println!("\n✅ Successfully generated {} icons!", report.len());
    Ok(())
}
