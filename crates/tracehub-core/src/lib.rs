#![deny(missing_docs)]

//! # tracehub-core — Foundational Types for TraceHub Compliance
//!
//! This crate defines the types that every other crate in the workspace
//! depends on. It has no internal crate dependencies — only `serde`,
//! `serde_json`, and `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`HsCode`] is a distinct
//!    type, not a bare `String`, so classification entry points cannot be
//!    handed arbitrary unrelated strings by accident.
//!
//! 2. **Single [`ComplianceScheme`] enum.** One definition of the regulatory
//!    categories, exhaustive `match` everywhere. No independent scheme lists
//!    that can diverge between the reference-data layer and the classifier.
//!
//! 3. **Total construction for [`HsCode`].** Unlike validated identifiers,
//!    an HS code is accepted in any form and normalized, because the
//!    classification contract degrades to "unregulated" on malformed input
//!    rather than rejecting it.
//!
//! 4. **[`TracehubError`] hierarchy.** Structured errors with `thiserror` —
//!    no `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod error;
pub mod hscode;
pub mod scheme;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{TracehubError, ValidationError};
pub use hscode::HsCode;
pub use scheme::{Classification, ComplianceScheme, DocumentKind};
