// crates/core/src/discovery.rs
use std::path::PathBuf;
use std::process::Command;

use crate::error::Result;

/// Port for deriving a version string from source-control metadata.
///
/// `Ok(None)` is the well-defined "unavailable" signal: the mechanism is
/// absent or cannot produce a version here. Callers decide what to fall
/// back to; implementations must not invent placeholder values.
pub trait VersionSource {
    fn discover(&self) -> Result<Option<String>>;
}

/// Derives a version by running `git describe` in a working directory.
pub struct GitVersionSource {
    repo_dir: PathBuf,
}

impl GitVersionSource {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self { repo_dir: repo_dir.into() }
    }
}

impl VersionSource for GitVersionSource {
    fn discover(&self) -> Result<Option<String>> {
        let output = match Command::new("git")
            .args(["describe", "--tags", "--dirty", "--always"])
            .current_dir(&self.repo_dir)
            .output()
        {
            Ok(output) => output,
            // git is not installed, or the directory vanished
            Err(e) => {
                log::debug!("git could not be invoked: {e}");
                return Ok(None);
            }
        };

        if !output.status.success() {
            log::debug!(
                "git describe failed with {} in {}",
                output.status,
                self.repo_dir.display()
            );
            return Ok(None);
        }

        let described = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!described.is_empty()).then_some(described))
    }
}
