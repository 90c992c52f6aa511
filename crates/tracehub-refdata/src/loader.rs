//! Snapshot file loading.
//!
//! YAML and JSON snapshot files deserialize into [`RegulatorySnapshot`] and
//! are validated before being handed to callers, so a loaded snapshot is
//! always structurally sound. Parse errors carry the file path.

use std::path::Path;

use crate::error::{RefdataError, RefdataResult};
use crate::snapshot::RegulatorySnapshot;

/// Load and validate a snapshot from a YAML or JSON file.
///
/// The format is selected by file extension: `.yaml`/`.yml` or `.json`.
///
/// # Errors
///
/// - [`RefdataError::FileNotFound`] if the path does not exist.
/// - [`RefdataError::UnsupportedExtension`] for any other extension.
/// - [`RefdataError::YamlParse`] / [`RefdataError::JsonParse`] on malformed
///   content.
/// - Any validation error from [`RegulatorySnapshot::validate`].
pub fn load_snapshot(path: &Path) -> RefdataResult<RegulatorySnapshot> {
    let content = read_file(path)?;

    let snapshot: RegulatorySnapshot = match extension(path) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).map_err(|e| RefdataError::YamlParse {
                path: path.to_path_buf(),
                source: e,
            })?
        }
        Some("json") => serde_json::from_str(&content).map_err(|e| RefdataError::JsonParse {
            path: path.to_path_buf(),
            source: e,
        })?,
        _ => {
            return Err(RefdataError::UnsupportedExtension {
                path: path.to_path_buf(),
            })
        }
    };

    snapshot.validate()?;

    tracing::debug!(
        snapshot_id = %snapshot.snapshot_id,
        effective_date = %snapshot.effective_date,
        entries = snapshot.entries.len(),
        path = %path.display(),
        "loaded regulatory snapshot"
    );

    Ok(snapshot)
}

fn read_file(path: &Path) -> RefdataResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RefdataError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RefdataError::Io(e)
        }
    })
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tracehub_core::ComplianceScheme;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    const VALID_YAML: &str = r#"
snapshot_id: eudr-2024-test
format_version: "1.0"
effective_date: 2024-12-30
source: test fixture
entries:
  - heading: "1801"
    scheme: eudr
    commodity: cocoa beans
  - heading: "0506"
    scheme: horn_hoof
"#;

    #[test]
    fn loads_valid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "snapshot.yaml", VALID_YAML);

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.snapshot_id, "eudr-2024-test");
        assert_eq!(snapshot.entries.len(), 2);
        let table = snapshot.heading_table().unwrap();
        assert_eq!(table.scheme_for("1801"), Some(ComplianceScheme::Eudr));
    }

    #[test]
    fn loads_valid_json() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"{
            "snapshot_id": "eudr-json-test",
            "format_version": "1.0",
            "effective_date": "2024-12-30",
            "entries": [{"heading": "0901", "scheme": "eudr"}]
        }"#;
        let path = write_temp(&dir, "snapshot.json", json);

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.snapshot_id, "eudr-json-test");
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let err = load_snapshot(Path::new("/nonexistent/snapshot.yaml")).unwrap_err();
        assert!(matches!(err, RefdataError::FileNotFound { .. }));
        assert!(format!("{err}").contains("/nonexistent/snapshot.yaml"));
    }

    #[test]
    fn unsupported_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "snapshot.toml", "snapshot_id = \"x\"");
        assert!(matches!(
            load_snapshot(&path),
            Err(RefdataError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn malformed_yaml_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "bad.yaml", "snapshot_id: [unclosed");
        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(err, RefdataError::YamlParse { .. }));
        assert!(format!("{err}").contains("bad.yaml"));
    }

    #[test]
    fn invalid_snapshot_rejected_at_load() {
        let dir = tempfile::tempdir().unwrap();
        let overlap = r#"
snapshot_id: overlap
format_version: "1.0"
effective_date: 2024-01-01
entries:
  - heading: "0506"
    scheme: horn_hoof
  - heading: "0506"
    scheme: eudr
"#;
        let path = write_temp(&dir, "overlap.yml", overlap);
        assert!(matches!(
            load_snapshot(&path),
            Err(RefdataError::SchemeOverlap { .. })
        ));
    }
}
