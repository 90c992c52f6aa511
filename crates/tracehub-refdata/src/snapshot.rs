//! # Regulatory Snapshots
//!
//! A [`RegulatorySnapshot`] is a point-in-time list of HS heading entries,
//! each assigning a 4-digit heading to a compliance scheme. Snapshots carry
//! a version and effective date so operators can tell exactly which revision
//! of the regulation a deployment classifies against.
//!
//! Validation happens once, at snapshot boundaries: classification code
//! only ever sees a [`HeadingTable`], which is valid by construction.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tracehub_core::ComplianceScheme;

use crate::digest::ContentDigest;
use crate::error::{RefdataError, RefdataResult};

/// Snapshot format version this build reads and writes.
pub const FORMAT_VERSION: &str = "1.0";

/// Snapshot identifier of the compiled default rule set.
pub const BUILTIN_SNAPSHOT_ID: &str = "builtin-eudr-2023";

/// One heading entry in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// The 4-digit HS heading (e.g., "1801").
    pub heading: String,
    /// The scheme this heading falls under.
    pub scheme: ComplianceScheme,
    /// Human-readable commodity description. Informational only; never
    /// consulted during classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commodity: Option<String>,
}

impl HeadingEntry {
    /// Create an entry with a commodity description.
    pub fn new(
        heading: impl Into<String>,
        scheme: ComplianceScheme,
        commodity: impl Into<String>,
    ) -> Self {
        Self {
            heading: heading.into(),
            scheme,
            commodity: Some(commodity.into()),
        }
    }
}

/// A point-in-time regulatory rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulatorySnapshot {
    /// Unique snapshot identifier (e.g., "eudr-2023-amendment-1").
    pub snapshot_id: String,
    /// Snapshot file format version; must equal [`FORMAT_VERSION`].
    pub format_version: String,
    /// The date this rule set entered into force.
    pub effective_date: NaiveDate,
    /// Where the rule set was sourced from (regulation reference, URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// The heading entries.
    pub entries: Vec<HeadingEntry>,
}

impl RegulatorySnapshot {
    /// The compiled default rule set: EUDR Annex I headings tracked by
    /// TraceHub plus the horn/hoof exclusions, as in force at release time.
    pub fn builtin() -> Self {
        Self {
            snapshot_id: BUILTIN_SNAPSHOT_ID.to_string(),
            format_version: FORMAT_VERSION.to_string(),
            // Regulation (EU) 2023/1115 entry into force.
            effective_date: NaiveDate::from_ymd_opt(2023, 6, 29)
                .expect("valid calendar date"),
            source: Some("Regulation (EU) 2023/1115, Annex I".to_string()),
            entries: vec![
                HeadingEntry::new("1801", ComplianceScheme::Eudr, "cocoa beans"),
                HeadingEntry::new("0901", ComplianceScheme::Eudr, "coffee"),
                HeadingEntry::new("1511", ComplianceScheme::Eudr, "palm oil"),
                HeadingEntry::new("4001", ComplianceScheme::Eudr, "natural rubber"),
                HeadingEntry::new("1201", ComplianceScheme::Eudr, "soya beans"),
                HeadingEntry::new("0506", ComplianceScheme::HornHoof, "bones and horn-cores"),
                HeadingEntry::new(
                    "0507",
                    ComplianceScheme::HornHoof,
                    "ivory, tortoise-shell, horns, hooves",
                ),
            ],
        }
    }

    /// Validate structural invariants of the snapshot.
    ///
    /// # Errors
    ///
    /// - [`RefdataError::FormatVersionMismatch`] if the declared format
    ///   version is not [`FORMAT_VERSION`].
    /// - [`RefdataError::EmptySnapshot`] if there are no entries.
    /// - [`RefdataError::InvalidHeading`] if a heading is not exactly
    ///   4 ASCII digits.
    /// - [`RefdataError::SchemeOverlap`] if one heading is claimed by two
    ///   different schemes (the sets must be disjoint).
    pub fn validate(&self) -> RefdataResult<()> {
        if self.format_version != FORMAT_VERSION {
            return Err(RefdataError::FormatVersionMismatch {
                expected: FORMAT_VERSION.to_string(),
                actual: self.format_version.clone(),
            });
        }
        if self.entries.is_empty() {
            return Err(RefdataError::EmptySnapshot {
                snapshot_id: self.snapshot_id.clone(),
            });
        }

        let mut seen: BTreeMap<&str, ComplianceScheme> = BTreeMap::new();
        for entry in &self.entries {
            validate_heading(&entry.heading)?;
            match seen.get(entry.heading.as_str()) {
                Some(&existing) if existing != entry.scheme => {
                    return Err(RefdataError::SchemeOverlap {
                        heading: entry.heading.clone(),
                        first: existing,
                        second: entry.scheme,
                    });
                }
                // Repeating a heading under the same scheme is redundant
                // but harmless.
                Some(_) => {}
                None => {
                    seen.insert(entry.heading.as_str(), entry.scheme);
                }
            }
        }
        Ok(())
    }

    /// Validate and index the snapshot into a lookup table.
    pub fn heading_table(&self) -> RefdataResult<HeadingTable> {
        self.validate()?;
        let mut table = BTreeMap::new();
        for entry in &self.entries {
            table.insert(entry.heading.clone(), entry.scheme);
        }
        Ok(HeadingTable {
            snapshot_id: self.snapshot_id.clone(),
            effective_date: self.effective_date,
            table,
        })
    }

    /// Compute the content digest of this snapshot.
    ///
    /// The digest is SHA-256 over the compact JSON rendering with
    /// lexicographically sorted object keys, so it is stable across YAML
    /// and JSON sources and across entry field ordering in the file.
    pub fn content_digest(&self) -> RefdataResult<ContentDigest> {
        // serde_json's Value map is key-sorted; round-tripping through it
        // canonicalizes object key order before serialization.
        let value = serde_json::to_value(self)?;
        let bytes = serde_json::to_vec(&value)?;
        Ok(ContentDigest::of_bytes(&bytes))
    }
}

/// Check that a reference heading is exactly 4 ASCII digits.
fn validate_heading(heading: &str) -> RefdataResult<()> {
    if heading.len() != 4 || !heading.chars().all(|c| c.is_ascii_digit()) {
        return Err(RefdataError::InvalidHeading {
            heading: heading.to_string(),
            reason: "expected exactly 4 ASCII digits".to_string(),
        });
    }
    Ok(())
}

/// The validated, indexed form of a snapshot.
///
/// Keys are 4-digit headings; lookups are exact. Because every key is
/// exactly 4 characters, an exact lookup on a candidate's 4-character
/// heading prefix is equivalent to the "prefix starts with a reference
/// heading" rule — and prefixes shorter than 4 characters can never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingTable {
    snapshot_id: String,
    effective_date: NaiveDate,
    table: BTreeMap<String, ComplianceScheme>,
}

impl HeadingTable {
    /// The scheme for a heading prefix, if the prefix is a tracked heading.
    pub fn scheme_for(&self, prefix: &str) -> Option<ComplianceScheme> {
        self.table.get(prefix).copied()
    }

    /// The number of distinct headings in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table has no headings. Unreachable through validated
    /// snapshots, but kept for the conventional pairing with `len`.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate the headings belonging to one scheme, in ascending order.
    pub fn headings_for(&self, scheme: ComplianceScheme) -> impl Iterator<Item = &str> {
        self.table
            .iter()
            .filter(move |(_, s)| **s == scheme)
            .map(|(h, _)| h.as_str())
    }

    /// The identifier of the snapshot this table was built from.
    pub fn snapshot_id(&self) -> &str {
        &self.snapshot_id
    }

    /// The effective date of the snapshot this table was built from.
    pub fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }
}
