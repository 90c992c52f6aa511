//! # tracehub-cli — CLI Tool for TraceHub Compliance
//!
//! Provides the `tracehub` command-line interface.
//!
//! ## Subcommands
//!
//! - `tracehub classify` — Classify one or more HS codes against the
//!   builtin rule set or a snapshot file.
//! - `tracehub refdata check` — Validate a snapshot file and print its
//!   metadata and content digest.
//! - `tracehub refdata show` — Print the builtin snapshot as YAML.
//!
//! ## Exit Codes
//!
//! - `0` — success (classification itself never fails).
//! - `1` — validation failure (`refdata check` on an invalid file).
//! - `2` — operational error (missing/unreadable file, bad format).

pub mod classify;
pub mod refdata;

use std::path::Path;

use anyhow::{Context, Result};

use tracehub_compliance::HsClassifier;
use tracehub_refdata::load_snapshot;

/// Build a classifier from an optional snapshot path, falling back to the
/// compiled builtin rule set.
pub fn build_classifier(refdata: Option<&Path>) -> Result<HsClassifier> {
    match refdata {
        Some(path) => {
            let snapshot = load_snapshot(path)
                .with_context(|| format!("failed to load snapshot from {}", path.display()))?;
            HsClassifier::from_snapshot(&snapshot)
                .with_context(|| format!("snapshot at {} is not usable", path.display()))
        }
        None => Ok(HsClassifier::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_fallback_when_no_path() {
        let classifier = build_classifier(None).unwrap();
        assert_eq!(classifier.snapshot_id(), "builtin-eudr-2023");
    }

    #[test]
    fn loads_classifier_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(
            br#"
snapshot_id: cli-test
format_version: "1.0"
effective_date: 2025-01-01
entries:
  - heading: "0901"
    scheme: eudr
"#,
        )
        .unwrap();

        let classifier = build_classifier(Some(&path)).unwrap();
        assert_eq!(classifier.snapshot_id(), "cli-test");
    }

    #[test]
    fn missing_file_is_contextual_error() {
        let err = build_classifier(Some(Path::new("/missing/snap.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("/missing/snap.yaml"));
    }
}
