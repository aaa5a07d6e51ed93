//! Public CPU cooling models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail; only the types a caller needs are re-exported.
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate
//! to the core API. A single `core` may be exposed through multiple adapters,
//! as [`thermal::cpu_cooling::CpuCooling`] and
//! [`thermal::cpu_cooling::ThrottleHeadroom`] are.

pub mod thermal;
