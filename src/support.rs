//! Supporting utilities used by the models.
//!
//! - [`constraint`]: Type-level numeric invariants.
//! - [`hardware`]: CPU and cooler records and the catalog interface.
//! - [`units`]: Extensions to [`uom`] (thermal resistance, temperature differences).

pub mod constraint;
pub mod hardware;
pub mod units;
