//! # verstamp core
//!
//! Version resolution and stamping for the packaging lifecycle.
//!
//! - [`discovery`]: source-control version discovery port and its git adapter
//! - [`stamp`]: the resolver that persists a version into the source tree
//! - [`manifest`]: package manifest loading and metadata assembly
//! - [`persistence`]: file read/write helpers
//! - [`error`]: crate-wide error type
//!
//! The discovery mechanism is always injected as a trait object, so the
//! resolver can be exercised with deterministic stubs.

// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod discovery;
pub mod error;
pub mod manifest;
pub mod persistence;
pub mod stamp;

pub use discovery::{GitVersionSource, VersionSource};
pub use error::{Result, StampError};
pub use manifest::{PackageManifest, PackageMetadata, load_long_description};
pub use stamp::{DEFAULT_FALLBACK, StampOptions, StampOptionsBuilder, Stamper};
