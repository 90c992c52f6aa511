//! # HS Code Domain Primitive
//!
//! [`HsCode`] wraps a Harmonized System tariff code string. The canonical
//! unit of comparison for classification is the *heading*: the first four
//! characters of the trimmed code, regardless of how many digits or
//! dot-separated suffix characters follow (e.g., `"1801.00.00"` has the
//! heading `"1801"`).
//!
//! ## Leniency
//!
//! Construction is total. Upstream shipment data routinely carries empty,
//! truncated, or otherwise malformed codes, and the classification contract
//! requires those to degrade to "unregulated" rather than be rejected.
//! The only normalization applied is whitespace trimming; content is never
//! validated or padded.

use serde::{Deserialize, Deserializer, Serialize};

/// A Harmonized System product code, stored in trimmed form.
///
/// Equality, hashing, and ordering operate on the trimmed raw value, so
/// `" 1801 "` and `"1801"` construct equal codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HsCode(String);

impl HsCode {
    /// Create an HS code from any string, trimming surrounding whitespace.
    ///
    /// Accepts empty and malformed input; see the module docs for why this
    /// constructor is total.
    pub fn new(value: impl Into<String>) -> Self {
        let s = value.into();
        let trimmed = s.trim();
        if trimmed.len() == s.len() {
            Self(s)
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Access the trimmed raw code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// The heading prefix: the first four characters of the trimmed code.
    ///
    /// Codes shorter than four characters yield their full length — no
    /// padding is applied, which means such codes can never match a
    /// four-digit reference heading.
    pub fn heading(&self) -> &str {
        match self.0.char_indices().nth(4) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl std::fmt::Display for HsCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HsCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for HsCode {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// Deserialization goes through the constructor so wire input is trimmed
// exactly like programmatic input.
impl<'de> Deserialize<'de> for HsCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}
