use serde::Deserialize;
use uom::si::f64::{Frequency, Power};

use crate::support::constraint::{Constrained, StrictlyPositive};

/// CPU vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Amd,
    Intel,
}

/// How the CPU die is built.
///
/// Stacked-cache parts (e.g. "X3D") put an extra layer between the cores and
/// the heat spreader, which raises junction-to-case resistance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DieStack {
    #[default]
    Planar,
    StackedCache,
}

/// Specification of a CPU model.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuSpec {
    pub name: String,

    /// Manufacturer thermal design power.
    pub tdp: Constrained<Power, StrictlyPositive>,

    pub release_year: u16,
    pub base_frequency: Frequency,
    pub boost_frequency: Frequency,
    pub vendor: Vendor,

    /// Free-form microarchitecture label, e.g. "Zen 4" or "Raptor Lake".
    pub microarchitecture: String,

    pub die_stack: DieStack,
}

impl CpuSpec {
    /// Returns the thermal design power.
    #[must_use]
    pub fn tdp(&self) -> Power {
        *self.tdp.as_ref()
    }
}
