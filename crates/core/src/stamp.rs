// crates/core/src/stamp.rs
use std::path::PathBuf;

use derive_builder::Builder;
use regex::Regex;

use crate::discovery::VersionSource;
use crate::error::Result;
use crate::persistence::{FileReader, FileWriter};

/// Placeholder used when no override is given and discovery is unavailable.
pub const DEFAULT_FALLBACK: &str = "0.0.0.0";

/// Matches the assignment line regardless of the version it currently holds.
const ASSIGNMENT_PATTERN: &str = "__version__ = '[^']*'";

const TEMPLATE_HEADER: &str = "\
# Package version file.
# This file is generated by verstamp; do not edit by hand.
";

/// Inputs controlling a single stamping run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct StampOptions {
    /// File that declares `__version__` for runtime introspection.
    pub target_path: PathBuf,
    /// Used when no override is supplied and discovery comes up empty.
    #[builder(default = "DEFAULT_FALLBACK.to_string()")]
    pub fallback: String,
}

/// Resolves a version string and persists it into the target file.
///
/// The discovery mechanism is injected, never read ambiently, so a
/// deterministic stub can stand in during tests.
pub struct Stamper<'a> {
    options: StampOptions,
    source: Option<&'a dyn VersionSource>,
}

impl<'a> Stamper<'a> {
    pub fn new(options: StampOptions, source: Option<&'a dyn VersionSource>) -> Self {
        Self { options, source }
    }

    /// Resolve the version and bring the target file in line with it.
    ///
    /// Resolution order: caller override, then source-control discovery,
    /// then the configured fallback. A missing or failing discovery
    /// mechanism is never fatal. Re-running with the same resolved
    /// version leaves the file byte-identical.
    ///
    /// # Errors
    ///
    /// Fails only on I/O: an unreadable existing target, or a write into
    /// a missing or unwritable parent directory.
    pub fn run(&self, version: Option<&str>) -> Result<String> {
        let version = match version {
            Some(v) => v.to_string(),
            None => self.discover_or_fallback(),
        };

        if self.options.target_path.is_file() {
            self.patch(&version)?;
        } else {
            self.create(&version)?;
        }

        Ok(version)
    }

    fn discover_or_fallback(&self) -> String {
        let discovered = self.source.and_then(|source| match source.discover() {
            Ok(found) => found,
            Err(e) => {
                // Unexpected discovery trouble is visible but non-fatal.
                log::warn!("version discovery failed: {e}");
                None
            }
        });

        discovered.unwrap_or_else(|| {
            log::debug!("no version discovered, falling back to '{}'", self.options.fallback);
            self.options.fallback.clone()
        })
    }

    fn create(&self, version: &str) -> Result<()> {
        log::debug!("generating {}", self.options.target_path.display());
        let content = format!("{TEMPLATE_HEADER}{}\n", assignment(version));
        FileWriter::atomic_write(&self.options.target_path, content.as_bytes())
    }

    fn patch(&self, version: &str) -> Result<()> {
        log::debug!("patching {}", self.options.target_path.display());
        let source = FileReader::read_to_string(&self.options.target_path)?;
        let re = Regex::new(ASSIGNMENT_PATTERN)?;
        // NoExpand keeps `$` in version strings literal.
        let patched = re.replace(&source, regex::NoExpand(&assignment(version)));
        FileWriter::atomic_write(&self.options.target_path, patched.as_bytes())
    }
}

fn assignment(version: &str) -> String {
    format!("__version__ = '{version}'")
}
