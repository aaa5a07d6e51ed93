use uom::si::{
    f64::{Power, Time},
    power::watt,
};

/// Power drawn by the CPU as a function of elapsed time.
pub trait PowerProfile {
    fn power_at(&self, time: Time) -> Power;
}

impl<F> PowerProfile for F
where
    F: Fn(Time) -> Power,
{
    fn power_at(&self, time: Time) -> Power {
        self(time)
    }
}

/// Warm-up, optional PL2 burst, then sustained load.
///
/// Before `warmup_end` the CPU draws `warmup`. After that, if a burst is
/// configured, it draws `min(modeled, pl2)` until `warmup_end + tau` and
/// `min(modeled, pl1)` afterwards. Without a burst it draws `sustained`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstProfile {
    pub warmup: Power,
    pub warmup_end: Time,
    pub burst: Option<Burst>,
    pub sustained: Power,
}

/// The PL2 phase of a [`BurstProfile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    pub modeled: Power,
    pub pl1: Power,
    pub pl2: Power,
    pub tau: Time,
}

impl PowerProfile for BurstProfile {
    fn power_at(&self, time: Time) -> Power {
        if time < self.warmup_end {
            return self.warmup;
        }

        let Some(burst) = self.burst else {
            return self.sustained;
        };

        let limit = if time < self.warmup_end + burst.tau {
            burst.pl2
        } else {
            burst.pl1
        };
        Power::new::<watt>(burst.modeled.get::<watt>().min(limit.get::<watt>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::second;

    fn watts(value: f64) -> Power {
        Power::new::<watt>(value)
    }

    fn seconds(value: f64) -> Time {
        Time::new::<second>(value)
    }

    fn at(profile: &impl PowerProfile, t: f64) -> f64 {
        profile.power_at(seconds(t)).get::<watt>()
    }

    #[test]
    fn closures_are_profiles() {
        let step = |t: Time| if t < seconds(10.0) { watts(5.0) } else { watts(50.0) };
        assert_relative_eq!(at(&step, 0.0), 5.0);
        assert_relative_eq!(at(&step, 10.0), 50.0);
    }

    #[test]
    fn burst_then_sustained() {
        let profile = BurstProfile {
            warmup: watts(12.0),
            warmup_end: seconds(5.0),
            burst: Some(Burst {
                modeled: watts(200.0),
                pl1: watts(125.0),
                pl2: watts(180.0),
                tau: seconds(28.0),
            }),
            sustained: watts(180.0),
        };

        assert_relative_eq!(at(&profile, 0.0), 12.0);
        assert_relative_eq!(at(&profile, 4.0), 12.0);
        assert_relative_eq!(at(&profile, 5.0), 180.0);
        assert_relative_eq!(at(&profile, 32.0), 180.0);
        assert_relative_eq!(at(&profile, 33.0), 125.0);
        assert_relative_eq!(at(&profile, 179.0), 125.0);
    }

    #[test]
    fn without_burst_settles_at_sustained() {
        let profile = BurstProfile {
            warmup: watts(8.0),
            warmup_end: seconds(5.0),
            burst: None,
            sustained: watts(60.0),
        };

        assert_relative_eq!(at(&profile, 2.0), 8.0);
        assert_relative_eq!(at(&profile, 5.0), 60.0);
        assert_relative_eq!(at(&profile, 120.0), 60.0);
    }
}
