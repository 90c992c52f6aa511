//! # tracehub-refdata — Versioned Regulatory Reference Data
//!
//! Regulatory heading lists change: EUDR commodity coverage is amended,
//! animal by-product headings get reinterpreted. Hard-coding the lists as
//! compiled constants alone would leave deployments stale between releases,
//! so this crate treats them as versioned reference data:
//!
//! - [`RegulatorySnapshot`]: A point-in-time set of HS heading entries, each
//!   mapping a 4-digit heading to a [`ComplianceScheme`](tracehub_core::ComplianceScheme),
//!   carrying a snapshot id, format version, and effective date.
//!
//! - [`HeadingTable`]: The validated, indexed form of a snapshot used for
//!   classification lookups.
//!
//! - [`loader`]: YAML/JSON snapshot loading with path-carrying errors.
//!
//! A compiled default ([`RegulatorySnapshot::builtin`]) covers the headings
//! in force at release time, so classification works with no configuration.
//!
//! ## Data Format
//!
//! Snapshots are stored as YAML (or JSON) files. Identity is a SHA-256
//! [`ContentDigest`] over the compact, key-sorted JSON rendering, giving
//! collaborating systems a cheap equality check on the rule set they run.

pub mod digest;
pub mod error;
pub mod loader;
pub mod snapshot;

// Re-export primary types.
pub use digest::ContentDigest;
pub use error::{RefdataError, RefdataResult};
pub use loader::load_snapshot;
pub use snapshot::{HeadingEntry, HeadingTable, RegulatorySnapshot, FORMAT_VERSION};
