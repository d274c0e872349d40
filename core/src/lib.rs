//! Invoicing ROI estimator core.
//!
//! A pure calculation engine over a validated input record, a legacy
//! flat-schema adapter, and a SQLite history store. No HTTP here — the
//! transport crate wires these pieces to the outside.

pub mod engine;
pub mod error;
pub mod input;
pub mod legacy;
pub mod store;
pub mod types;
