use serde::Deserialize;
use uom::si::{
    f64::{Power, Ratio},
    ratio::ratio,
};

use crate::support::constraint::{Constrained, NonNegative, UnitInterval};

/// Build quality tier of an air cooler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirTier {
    Budget,
    Mainstream,
    Premium,
}

/// Kind and size of a cooler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoolerKind {
    /// Tower or top-down air cooler.
    Air(AirTier),

    /// All-in-one liquid cooler with a radiator of the given length.
    LiquidAio { radiator_mm: u16 },
}

/// Specification of a cooler model.
///
/// The nominal capacity is derived from the manufacturer rating once, at
/// construction, using a calibration fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct CoolerSpec {
    name: String,
    kind: CoolerKind,
    rated_capacity: Constrained<Power, NonNegative>,
    nominal_capacity: Power,
    noise_dba: Constrained<f64, NonNegative>,
    rated_lifetime_years: u32,
}

impl CoolerSpec {
    /// Creates a cooler record, deriving its nominal capacity as
    /// `rated_capacity × nominal_fraction`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: CoolerKind,
        rated_capacity: Constrained<Power, NonNegative>,
        noise_dba: Constrained<f64, NonNegative>,
        rated_lifetime_years: u32,
        nominal_fraction: Constrained<Ratio, UnitInterval>,
    ) -> Self {
        let fraction = nominal_fraction.into_inner().get::<ratio>();
        let nominal_capacity = *rated_capacity.as_ref() * fraction;
        Self {
            name: name.into(),
            kind,
            rated_capacity,
            nominal_capacity,
            noise_dba,
            rated_lifetime_years,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> CoolerKind {
        self.kind
    }

    /// Manufacturer-rated heat dissipation.
    #[must_use]
    pub fn rated_capacity(&self) -> Power {
        *self.rated_capacity.as_ref()
    }

    /// Capacity used by the models in place of the manufacturer rating.
    #[must_use]
    pub fn nominal_capacity(&self) -> Power {
        self.nominal_capacity
    }

    /// Rated noise at full fan speed, in dB(A).
    #[must_use]
    pub fn noise_dba(&self) -> f64 {
        *self.noise_dba.as_ref()
    }

    #[must_use]
    pub fn rated_lifetime_years(&self) -> u32 {
        self.rated_lifetime_years
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{power::watt, ratio::percent};

    #[test]
    fn nominal_capacity_is_derived_from_rating() {
        let cooler = CoolerSpec::new(
            "Tower 250",
            CoolerKind::Air(AirTier::Premium),
            NonNegative::new(Power::new::<watt>(250.0)).unwrap(),
            NonNegative::new(24.0).unwrap(),
            8,
            UnitInterval::new(Ratio::new::<percent>(95.0)).unwrap(),
        );

        assert_relative_eq!(cooler.nominal_capacity().get::<watt>(), 237.5, epsilon = 1e-9);
        assert_relative_eq!(cooler.rated_capacity().get::<watt>(), 250.0);
    }

    #[test]
    fn unrated_cooler_has_zero_nominal() {
        let cooler = CoolerSpec::new(
            "Passive block",
            CoolerKind::Air(AirTier::Budget),
            NonNegative::zero(),
            NonNegative::zero(),
            3,
            UnitInterval::one(),
        );

        assert_eq!(cooler.nominal_capacity(), Power::new::<watt>(0.0));
    }
}
