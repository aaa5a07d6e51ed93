//! Sustained (PL1) and burst (PL2) power limits.

use uom::si::{
    f64::{Power, Time},
    power::watt,
    time::second,
};

/// Power limits of a CPU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLimits {
    /// Sustained limit.
    pub pl1: Power,

    /// Short-term burst limit.
    pub pl2: Power,

    /// How long the CPU may hold PL2 before falling back to PL1.
    pub tau: Time,
}

impl PowerLimits {
    /// Clamps a modeled power draw to PL2 when bursting is allowed,
    /// or to PL1 otherwise.
    ///
    /// This is a plain clamp. It does not track an energy budget over time.
    #[must_use]
    pub fn apply(&self, modeled: Power, allow_burst: bool) -> Power {
        let limit = if allow_burst { self.pl2 } else { self.pl1 };
        Power::new::<watt>(modeled.get::<watt>().min(limit.get::<watt>()))
    }
}

/// Multipliers applied to TDP to obtain [`PowerLimits`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLimitMultipliers {
    pub pl1: f64,
    pub pl2: f64,
    pub tau: Time,
}

/// Multipliers used for CPUs released in or after `from_year`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLimitTier {
    pub from_year: u16,
    pub multipliers: PowerLimitMultipliers,
}

/// Release-year policy for deriving power limits.
///
/// The newest tier whose `from_year` does not exceed the CPU's release year
/// applies. CPUs older than every tier use `oldest`.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerLimitTiers {
    pub tiers: Vec<PowerLimitTier>,
    pub oldest: PowerLimitMultipliers,
}

impl Default for PowerLimitTiers {
    fn default() -> Self {
        Self {
            tiers: vec![
                PowerLimitTier {
                    from_year: 2022,
                    multipliers: PowerLimitMultipliers {
                        pl1: 1.2,
                        pl2: 1.8,
                        tau: Time::new::<second>(28.0),
                    },
                },
                PowerLimitTier {
                    from_year: 2017,
                    multipliers: PowerLimitMultipliers {
                        pl1: 1.05,
                        pl2: 1.4,
                        tau: Time::new::<second>(20.0),
                    },
                },
            ],
            oldest: PowerLimitMultipliers {
                pl1: 1.0,
                pl2: 1.2,
                tau: Time::new::<second>(10.0),
            },
        }
    }
}

/// Derives PL1, PL2, and tau from TDP and release year.
#[must_use]
pub fn derive_power_limits(tdp: Power, release_year: u16, policy: &PowerLimitTiers) -> PowerLimits {
    let multipliers = policy
        .tiers
        .iter()
        .filter(|tier| tier.from_year <= release_year)
        .max_by_key(|tier| tier.from_year)
        .map_or(policy.oldest, |tier| tier.multipliers);

    PowerLimits {
        pl1: tdp * multipliers.pl1,
        pl2: tdp * multipliers.pl2,
        tau: multipliers.tau,
    }
}
