//! CPU and cooler records, and the catalog they are looked up from.
//!
//! The records are read-only inputs to the cooling models. They are built
//! once, at ingestion time, with every categorical property the models need
//! already resolved into structured fields (vendor, die stacking, cooler kind,
//! radiator size, air tier), so no model ever inspects a product name.
//!
//! Catalog data itself is external. [`Catalog`] is the lookup interface the
//! models consume; [`InMemoryCatalog`] is a simple implementation that can be
//! loaded from JSON.

mod catalog;
mod cooler;
mod cpu;

pub use catalog::{Catalog, CatalogError, InMemoryCatalog};
pub use cooler::{AirTier, CoolerKind, CoolerSpec};
pub use cpu::{CpuSpec, DieStack, Vendor};
