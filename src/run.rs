// src/run.rs
use anyhow::Result;

use verstamp_core::discovery::{GitVersionSource, VersionSource};
use verstamp_core::manifest::{PackageManifest, load_long_description};
use verstamp_core::stamp::{StampOptionsBuilder, Stamper};

use crate::config::RunPlan;

/// Execute one packaging-lifecycle run: resolve the version, stamp the
/// version source file, and emit the metadata record.
pub fn run(plan: &RunPlan) -> Result<()> {
    let manifest = PackageManifest::load(&plan.manifest_path)?;
    let long_description = load_long_description(&plan.readme_path)?;

    let target = plan
        .target_path
        .clone()
        .unwrap_or_else(|| manifest.default_target_path());

    let options = StampOptionsBuilder::default()
        .target_path(target)
        .fallback(plan.fallback.clone())
        .build()?;

    let git;
    let source: Option<&dyn VersionSource> = if plan.discovery {
        git = GitVersionSource::new(&plan.repo_dir);
        Some(&git)
    } else {
        None
    };

    let version = Stamper::new(options, source).run(plan.version_override.as_deref())?;
    log::info!("stamped version {version}");

    let metadata = manifest.into_metadata(version, long_description);
    let json = serde_json::to_string_pretty(&metadata)?;

    match &plan.out {
        Some(path) => std::fs::write(path, json + "\n")?,
        None => println!("{json}"),
    }

    Ok(())
}
