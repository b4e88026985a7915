// src/args.rs
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "verstamp",
    version,
    about = "Stamp a resolved version into a package source tree and emit its metadata"
)]
pub struct Args {
    /// Package manifest with the static metadata fields
    #[arg(long, value_name = "PATH", default_value = "manifest.json")]
    pub manifest: PathBuf,

    /// Long-description document forwarded verbatim into the metadata
    #[arg(long, value_name = "PATH", default_value = "README.rst")]
    pub readme: PathBuf,

    /// Use this version instead of consulting source control
    #[arg(long, value_name = "VERSION")]
    pub set: Option<String>,

    /// Version source file (defaults to <name>/_version.py)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Placeholder version used when discovery is unavailable
    #[arg(long, value_name = "VERSION", default_value = verstamp_core::DEFAULT_FALLBACK)]
    pub fallback: String,

    /// Skip source-control discovery entirely
    #[arg(long)]
    pub no_discovery: bool,

    /// Repository to run discovery in
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub repo: PathBuf,

    /// Write the metadata JSON here instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}
