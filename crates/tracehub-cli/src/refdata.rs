//! # Refdata Subcommand
//!
//! Snapshot inspection and validation: `check` validates a snapshot file
//! before it is rolled out to classifiers, `show` prints the builtin rule
//! set so operators can diff a candidate file against it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use tracehub_refdata::{load_snapshot, RefdataError, RegulatorySnapshot};

/// Arguments for the `tracehub refdata` subcommand.
#[derive(Args, Debug)]
pub struct RefdataArgs {
    #[command(subcommand)]
    pub command: RefdataCommand,
}

/// Refdata operations.
#[derive(Subcommand, Debug)]
pub enum RefdataCommand {
    /// Load and validate a snapshot file; print metadata and digest.
    Check {
        /// Path to a YAML or JSON snapshot file.
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Print the builtin snapshot as YAML, with its content digest.
    Show,
}

/// Execute the refdata subcommand.
///
/// Returns exit code: 0 on success, 1 when a checked file fails
/// validation, 2 on operational error (propagated as `Err`).
pub fn run_refdata(args: &RefdataArgs) -> Result<u8> {
    match &args.command {
        RefdataCommand::Check { path } => {
            let snapshot = match load_snapshot(path) {
                Ok(snapshot) => snapshot,
                // Validation failures are a report, not an operational error.
                Err(
                    err @ (RefdataError::InvalidHeading { .. }
                    | RefdataError::SchemeOverlap { .. }
                    | RefdataError::EmptySnapshot { .. }
                    | RefdataError::FormatVersionMismatch { .. }),
                ) => {
                    println!("FAIL: {} — {err}", path.display());
                    return Ok(1);
                }
                Err(err) => {
                    return Err(err).with_context(|| {
                        format!("failed to read snapshot from {}", path.display())
                    });
                }
            };

            print_summary(&snapshot)?;
            println!("OK: {}", path.display());
            Ok(0)
        }
        RefdataCommand::Show => {
            let snapshot = RegulatorySnapshot::builtin();
            print!("{}", serde_yaml::to_string(&snapshot)?);
            print_summary(&snapshot)?;
            Ok(0)
        }
    }
}

fn print_summary(snapshot: &RegulatorySnapshot) -> Result<()> {
    let digest = snapshot.content_digest()?;
    println!("snapshot_id:    {}", snapshot.snapshot_id);
    println!("effective_date: {}", snapshot.effective_date);
    println!("entries:        {}", snapshot.entries.len());
    println!("digest:         {digest}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn check_valid_snapshot_returns_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "ok.yaml",
            r#"
snapshot_id: check-test
format_version: "1.0"
effective_date: 2025-01-01
entries:
  - heading: "1511"
    scheme: eudr
"#,
        );
        let args = RefdataArgs {
            command: RefdataCommand::Check { path },
        };
        assert_eq!(run_refdata(&args).unwrap(), 0);
    }

    #[test]
    fn check_invalid_snapshot_returns_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "overlap.yaml",
            r#"
snapshot_id: overlap
format_version: "1.0"
effective_date: 2025-01-01
entries:
  - heading: "0506"
    scheme: eudr
  - heading: "0506"
    scheme: horn_hoof
"#,
        );
        let args = RefdataArgs {
            command: RefdataCommand::Check { path },
        };
        assert_eq!(run_refdata(&args).unwrap(), 1);
    }

    #[test]
    fn check_missing_file_is_operational_error() {
        let args = RefdataArgs {
            command: RefdataCommand::Check {
                path: PathBuf::from("/missing/snap.yaml"),
            },
        };
        assert!(run_refdata(&args).is_err());
    }

    #[test]
    fn show_builtin_succeeds() {
        let args = RefdataArgs {
            command: RefdataCommand::Show,
        };
        assert_eq!(run_refdata(&args).unwrap(), 0);
    }
}
