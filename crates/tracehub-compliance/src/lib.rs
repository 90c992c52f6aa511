#![deny(missing_docs)]

//! # tracehub-compliance — HS-Code Compliance Classification
//!
//! Determines, for a Harmonized System product code, (a) whether the EU
//! Deforestation Regulation (EUDR) applies, and (b) whether the product is
//! a horn/hoof product requiring a TRACES veterinary certificate instead
//! of EUDR paperwork.
//!
//! Two entry points:
//!
//! - The free functions [`is_eudr_required`] / [`is_horn_hoof_product`] /
//!   [`classify`]: pure, allocation-free predicates over the compiled
//!   heading constants. These are the contract callers embed in document
//!   workflows.
//!
//! - [`HsClassifier`]: the same rules driven by a
//!   [`RegulatorySnapshot`](tracehub_refdata::RegulatorySnapshot), for
//!   deployments that track regulatory amendments without a rebuild.
//!   [`HsClassifier::builtin`] agrees with the free functions on every
//!   input.
//!
//! ## Failure Semantics
//!
//! Classification is total and never errors: empty, whitespace-only, and
//! malformed codes classify as unregulated. Callers must read a negative
//! result as "not confirmed as regulated" — a truncated but genuinely
//! EUDR-covered code also reports `false`.

pub mod classifier;

pub use classifier::{
    classify, is_eudr_required, is_horn_hoof_product, HsClassifier, EUDR_HEADINGS,
    HORN_HOOF_HEADINGS,
};
