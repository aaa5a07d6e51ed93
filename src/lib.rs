//! # CPU Cooling
//!
//! Heuristic models of how well a CPU cooler keeps a processor within its
//! thermal limits, built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a CPU, a cooler, and operating conditions, the models estimate
//! package power, a junction-to-ambient thermal resistance chain, steady and
//! transient temperatures, fan noise, cooler lifetime, and throttling risk.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations for CPU cooling.
//! - [`support`]: Supporting utilities used by models (numeric constraints,
//!   thermal units, hardware records, and the catalog interface).
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and only moves to
//! [`support`] once more than one model, or code outside this crate, needs it.
//! Model-specific utility code remains private.

pub mod models;
pub mod support;
