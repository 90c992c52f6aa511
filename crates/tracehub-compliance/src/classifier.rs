//! # HS-Code Classification Rules
//!
//! The unit of comparison is the *heading prefix*: the first four characters
//! of the trimmed code. A candidate matches a reference heading when its
//! prefix starts with that heading. All reference headings are exactly four
//! characters, so this collapses to exact equality once the prefix reaches
//! four characters and to no match for anything shorter — a 2-digit
//! chapter-level code never classifies. Whether short codes *should*
//! classify is a question for the regulatory source of truth; the rule here
//! fails closed.

use tracehub_core::{Classification, ComplianceScheme, HsCode};
use tracehub_refdata::{HeadingTable, RefdataResult, RegulatorySnapshot};

/// HS headings subject to the EU Deforestation Regulation: cocoa, coffee,
/// palm oil, natural rubber, soybeans.
pub const EUDR_HEADINGS: [&str; 5] = ["1801", "0901", "1511", "4001", "1201"];

/// HS headings for horn/hoof animal products, explicitly excluded from EUDR
/// and documented through the EU TRACES veterinary channel.
pub const HORN_HOOF_HEADINGS: [&str; 2] = ["0506", "0507"];

/// The heading prefix of a raw code: trim, then take the first four
/// characters (char-boundary safe, no padding).
fn heading_prefix(hs_code: &str) -> &str {
    let trimmed = hs_code.trim();
    match trimmed.char_indices().nth(4) {
        Some((idx, _)) => &trimmed[..idx],
        None => trimmed,
    }
}

fn matches_any(hs_code: &str, headings: &[&str]) -> bool {
    let prefix = heading_prefix(hs_code);
    if prefix.is_empty() {
        return false;
    }
    headings.iter().any(|heading| prefix.starts_with(heading))
}

/// Whether the EU Deforestation Regulation applies to this HS code.
///
/// Total over all strings: empty, whitespace-only, and malformed input
/// return `false`. Dot-separated suffixes are ignored (`"1801.00.00"`
/// classifies like `"1801"`).
pub fn is_eudr_required(hs_code: &str) -> bool {
    matches_any(hs_code, &EUDR_HEADINGS)
}

/// Whether this HS code is a horn/hoof product requiring a TRACES
/// veterinary certificate instead of EUDR documents.
///
/// Same contract and algorithm as [`is_eudr_required`], over the horn/hoof
/// heading set.
pub fn is_horn_hoof_product(hs_code: &str) -> bool {
    matches_any(hs_code, &HORN_HOOF_HEADINGS)
}

/// Classify an HS code against both fixed heading sets.
///
/// The sets are disjoint, so at most one scheme can match.
pub fn classify(hs_code: &str) -> Classification {
    if is_eudr_required(hs_code) {
        Classification::Scheme(ComplianceScheme::Eudr)
    } else if is_horn_hoof_product(hs_code) {
        Classification::Scheme(ComplianceScheme::HornHoof)
    } else {
        Classification::Unregulated
    }
}

/// A classifier driven by a regulatory snapshot instead of the compiled
/// constants.
///
/// Construction validates the snapshot once; classification is then an
/// exact table lookup on the heading prefix, which is equivalent to the
/// starts-with rule because every table key is exactly four digits.
#[derive(Debug, Clone)]
pub struct HsClassifier {
    table: HeadingTable,
}

impl HsClassifier {
    /// A classifier over the compiled default rule set.
    ///
    /// Agrees with the free functions on every input.
    pub fn builtin() -> Self {
        let snapshot = RegulatorySnapshot::builtin();
        let table = snapshot
            .heading_table()
            .unwrap_or_else(|e| unreachable!("builtin snapshot is valid by construction: {e}"));
        Self { table }
    }

    /// Build a classifier from a regulatory snapshot.
    ///
    /// # Errors
    ///
    /// Returns any snapshot validation failure (malformed heading, scheme
    /// overlap, empty snapshot, format version mismatch).
    pub fn from_snapshot(snapshot: &RegulatorySnapshot) -> RefdataResult<Self> {
        let table = snapshot.heading_table()?;
        tracing::debug!(
            snapshot_id = table.snapshot_id(),
            headings = table.len(),
            "classifier built from snapshot"
        );
        Ok(Self { table })
    }

    /// Classify a single HS code.
    pub fn classify(&self, code: &HsCode) -> Classification {
        match self.table.scheme_for(code.heading()) {
            Some(scheme) => Classification::Scheme(scheme),
            None => Classification::Unregulated,
        }
    }

    /// Whether EUDR applies to this code under the loaded rule set.
    pub fn is_eudr_required(&self, code: &HsCode) -> bool {
        self.classify(code).is_eudr()
    }

    /// Whether this code is a horn/hoof product under the loaded rule set.
    pub fn is_horn_hoof_product(&self, code: &HsCode) -> bool {
        self.classify(code).is_horn_hoof()
    }

    /// The identifier of the snapshot backing this classifier.
    pub fn snapshot_id(&self) -> &str {
        self.table.snapshot_id()
    }

    /// The effective date of the snapshot backing this classifier.
    pub fn effective_date(&self) -> chrono::NaiveDate {
        self.table.effective_date()
    }
}
