//! # Compliance Schemes — Single Source of Truth
//!
//! Defines the [`ComplianceScheme`] enum covering the regulatory categories
//! TraceHub tracks for HS-coded goods. This is the single definition used by
//! every crate in the workspace. The Rust compiler enforces exhaustive
//! `match` — adding a scheme forces every handler to address it, including
//! the document-requirement mapping.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A regulatory scheme that an HS heading can fall under.
///
/// The two schemes are disjoint by regulation: horn/hoof products (headings
/// 0506/0507) are explicitly excluded from EUDR and documented through the
/// EU TRACES veterinary channel instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceScheme {
    /// EU Deforestation Regulation (cocoa, coffee, palm oil, rubber, soy).
    Eudr,
    /// Horn/hoof animal products requiring veterinary documentation.
    HornHoof,
}

impl ComplianceScheme {
    /// Return all compliance schemes as a slice.
    pub fn all() -> &'static [ComplianceScheme] {
        &[Self::Eudr, Self::HornHoof]
    }

    /// The total number of compliance schemes.
    pub const COUNT: usize = 2;

    /// The document kind a product under this scheme must carry.
    pub fn documentation(self) -> DocumentKind {
        match self {
            Self::Eudr => DocumentKind::EudrDueDiligence,
            Self::HornHoof => DocumentKind::TracesVeterinaryCertificate,
        }
    }
}

impl std::fmt::Display for ComplianceScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Eudr => "eudr",
            Self::HornHoof => "horn_hoof",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ComplianceScheme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eudr" => Ok(Self::Eudr),
            "horn_hoof" => Ok(Self::HornHoof),
            other => Err(ValidationError::UnknownScheme(other.to_string())),
        }
    }
}

/// The compliance document type requested from a supplier for a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// EUDR due-diligence statement with geolocation evidence.
    EudrDueDiligence,
    /// EU TRACES veterinary certificate for animal by-products.
    TracesVeterinaryCertificate,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::EudrDueDiligence => "eudr_due_diligence",
            Self::TracesVeterinaryCertificate => "traces_veterinary_certificate",
        };
        write!(f, "{s}")
    }
}

/// The result of classifying a single HS code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// The heading falls under a regulatory scheme.
    Scheme(ComplianceScheme),
    /// The heading matches no tracked scheme. This means "not confirmed as
    /// regulated", not "definitely exempt" — malformed or truncated codes
    /// land here too.
    Unregulated,
}

impl Classification {
    /// The matched scheme, if any.
    pub fn as_scheme(self) -> Option<ComplianceScheme> {
        match self {
            Self::Scheme(scheme) => Some(scheme),
            Self::Unregulated => None,
        }
    }

    /// Whether the code falls under EUDR.
    pub fn is_eudr(self) -> bool {
        matches!(self, Self::Scheme(ComplianceScheme::Eudr))
    }

    /// Whether the code is a horn/hoof product.
    pub fn is_horn_hoof(self) -> bool {
        matches!(self, Self::Scheme(ComplianceScheme::HornHoof))
    }

    /// The document kind required, if the code is regulated.
    pub fn required_document(self) -> Option<DocumentKind> {
        self.as_scheme().map(ComplianceScheme::documentation)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scheme(scheme) => write!(f, "{scheme}"),
            Self::Unregulated => write!(f, "unregulated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_display_round_trips_from_str() {
        for scheme in ComplianceScheme::all() {
            let parsed: ComplianceScheme = scheme.to_string().parse().unwrap();
            assert_eq!(parsed, *scheme);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("gdpr".parse::<ComplianceScheme>().is_err());
        assert!("".parse::<ComplianceScheme>().is_err());
        // Display strings are the only accepted forms.
        assert!("EUDR".parse::<ComplianceScheme>().is_err());
    }

    #[test]
    fn all_covers_every_variant() {
        assert_eq!(ComplianceScheme::all().len(), ComplianceScheme::COUNT);
    }

    #[test]
    fn documentation_mapping() {
        assert_eq!(
            ComplianceScheme::Eudr.documentation(),
            DocumentKind::EudrDueDiligence
        );
        assert_eq!(
            ComplianceScheme::HornHoof.documentation(),
            DocumentKind::TracesVeterinaryCertificate
        );
    }

    #[test]
    fn scheme_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&ComplianceScheme::HornHoof).unwrap(),
            "\"horn_hoof\""
        );
        let parsed: ComplianceScheme = serde_json::from_str("\"eudr\"").unwrap();
        assert_eq!(parsed, ComplianceScheme::Eudr);
    }

    #[test]
    fn classification_predicates() {
        let eudr = Classification::Scheme(ComplianceScheme::Eudr);
        let horn = Classification::Scheme(ComplianceScheme::HornHoof);
        let none = Classification::Unregulated;

        assert!(eudr.is_eudr() && !eudr.is_horn_hoof());
        assert!(horn.is_horn_hoof() && !horn.is_eudr());
        assert!(!none.is_eudr() && !none.is_horn_hoof());
        assert_eq!(none.required_document(), None);
        assert_eq!(
            horn.required_document(),
            Some(DocumentKind::TracesVeterinaryCertificate)
        );
    }

    #[test]
    fn classification_display() {
        assert_eq!(Classification::Unregulated.to_string(), "unregulated");
        assert_eq!(
            Classification::Scheme(ComplianceScheme::Eudr).to_string(),
            "eudr"
        );
    }
}
