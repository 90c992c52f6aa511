//! # Classify Subcommand
//!
//! Classifies HS codes and reports the applicable scheme and required
//! document kind. Classification is total, so this subcommand only fails
//! operationally (an unusable `--refdata` file).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use tracehub_core::{ComplianceScheme, DocumentKind, HsCode};

use crate::build_classifier;

/// Arguments for the `tracehub classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// HS codes to classify.
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,

    /// Classify against a snapshot file instead of the builtin rule set.
    #[arg(long, value_name = "PATH")]
    pub refdata: Option<PathBuf>,

    /// Emit a JSON array instead of human-readable lines.
    #[arg(long)]
    pub json: bool,
}

/// One classified code in the report.
#[derive(Debug, Serialize)]
pub struct ClassifiedCode {
    /// The trimmed input code.
    pub code: String,
    /// The heading prefix used for the lookup.
    pub heading: String,
    /// The matched scheme, or null when unregulated.
    pub scheme: Option<ComplianceScheme>,
    /// The required document kind, or null when unregulated.
    pub documentation: Option<DocumentKind>,
}

/// Execute the classify subcommand.
///
/// Returns exit code 0 when classification ran, 2 on operational error
/// (propagated as `Err`).
pub fn run_classify(args: &ClassifyArgs) -> Result<u8> {
    let classifier = build_classifier(args.refdata.as_deref())?;

    tracing::info!(
        snapshot_id = classifier.snapshot_id(),
        effective_date = %classifier.effective_date(),
        codes = args.codes.len(),
        "classifying HS codes"
    );

    let report: Vec<ClassifiedCode> = args
        .codes
        .iter()
        .map(|raw| {
            let code = HsCode::new(raw.as_str());
            let classification = classifier.classify(&code);
            ClassifiedCode {
                code: code.as_str().to_string(),
                heading: code.heading().to_string(),
                scheme: classification.as_scheme(),
                documentation: classification.required_document(),
            }
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for item in &report {
            let scheme = item
                .scheme
                .map(|s| s.to_string())
                .unwrap_or_else(|| "unregulated".to_string());
            match item.documentation {
                Some(doc) => {
                    println!("{}: {} (requires {})", item.code, scheme, doc);
                }
                None => println!("{}: {}", item.code, scheme),
            }
        }
    }

    Ok(0)
}
