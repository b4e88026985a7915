// crates/core/src/manifest.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StampError};
use crate::persistence::FileReader;

/// Static package description read from the manifest file.
///
/// These fields carry no behavior of their own; they ride along into the
/// metadata record handed to the packaging tool.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub author_email: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Full metadata record for the packaging collaborator: the manifest
/// fields plus the resolved version and the long description.
#[derive(Debug, Clone, Serialize)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub long_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl PackageManifest {
    /// Load and validate the manifest.
    pub fn load(path: &Path) -> Result<Self> {
        let text = FileReader::read_to_string(path)?;
        let manifest: Self = serde_json::from_str(&text)?;
        if manifest.name.trim().is_empty() {
            return Err(StampError::Manifest("package name must not be empty".into()));
        }
        Ok(manifest)
    }

    /// Default location of the version source file for this package.
    pub fn default_target_path(&self) -> PathBuf {
        PathBuf::from(self.name.to_lowercase()).join("_version.py")
    }

    /// Combine the static fields with the resolved version and README text.
    /// The published name is lowercased; everything else passes through.
    pub fn into_metadata(self, version: String, long_description: String) -> PackageMetadata {
        PackageMetadata {
            name: self.name.to_lowercase(),
            version,
            description: self.description,
            long_description,
            author: self.author,
            author_email: self.author_email,
            url: self.url,
            license: self.license,
            keywords: self.keywords,
        }
    }
}

/// Read the long-description document in full. The text is forwarded
/// verbatim into the metadata record, no parsing performed.
pub fn load_long_description(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(StampError::ReadmeMissing { path: path.to_path_buf() });
    }
    FileReader::read_to_string(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("manifest.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn load_accepts_minimal_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), r#"{"name": "FlyingCircus"}"#);

        let manifest = PackageManifest::load(&path).unwrap();
        assert_eq!(manifest.name, "FlyingCircus");
        assert_eq!(manifest.default_target_path(), PathBuf::from("flyingcircus/_version.py"));
    }

    #[test]
    fn load_rejects_blank_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), r#"{"name": "  "}"#);

        let err = PackageManifest::load(&path).unwrap_err();
        assert!(matches!(err, StampError::Manifest(_)));
    }

    #[test]
    fn load_surfaces_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), "{not json");

        let err = PackageManifest::load(&path).unwrap_err();
        assert!(matches!(err, StampError::Json(_)));
    }

    #[test]
    fn metadata_carries_version_and_long_description() {
        let manifest = PackageManifest {
            name: "Sample".into(),
            description: Some("A sample".into()),
            author: Some("A. Author".into()),
            author_email: None,
            url: None,
            license: Some("GPLv3+".into()),
            keywords: vec!["utils".into()],
        };

        let metadata = manifest.into_metadata("1.2.3".into(), "Long text.\n".into());

        assert_eq!(metadata.name, "sample");
        assert_eq!(metadata.version, "1.2.3");
        assert_eq!(metadata.long_description, "Long text.\n");
        assert_eq!(metadata.license.as_deref(), Some("GPLv3+"));
    }

    #[test]
    fn metadata_serialization_omits_absent_fields() {
        let manifest = PackageManifest {
            name: "Sample".into(),
            description: None,
            author: None,
            author_email: None,
            url: None,
            license: None,
            keywords: vec![],
        };

        let metadata = manifest.into_metadata("0.1.0".into(), String::new());
        let json = serde_json::to_string(&metadata).unwrap();

        assert!(json.contains("\"version\":\"0.1.0\""));
        assert!(!json.contains("author"));
        assert!(!json.contains("keywords"));
    }

    #[test]
    fn missing_readme_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_long_description(&dir.path().join("README.rst")).unwrap_err();
        assert!(matches!(err, StampError::ReadmeMissing { .. }));
    }

    #[test]
    fn readme_text_is_forwarded_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.rst");
        std::fs::write(&path, "Title\n=====\n\nBody text.\n").unwrap();

        let text = load_long_description(&path).unwrap();
        assert_eq!(text, "Title\n=====\n\nBody text.\n");
    }
}
