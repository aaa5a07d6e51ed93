use uom::si::{
    f64::{Frequency, Power, Ratio, ThermodynamicTemperature},
    frequency::gigahertz,
    power::watt,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive, UnitInterval},
    hardware::{AirTier, CoolerKind, CoolerSpec, CpuSpec, DieStack, Vendor},
};

use super::SimulationParams;

/// Catalog document with a few real parts and one duplicated cooler name.
pub(crate) const CATALOG_JSON: &str = r#"{
    "cpus": [
        {
            "name": "Intel Core i5-12400F", "tdp_watts": 65, "release_year": 2022,
            "base_ghz": 2.5, "boost_ghz": 4.4, "vendor": "intel",
            "microarchitecture": "Alder Lake"
        },
        {
            "name": "AMD Ryzen 7 5800X3D", "tdp_watts": 105, "release_year": 2022,
            "base_ghz": 3.4, "boost_ghz": 4.5, "vendor": "amd",
            "microarchitecture": "Zen 3 (3D)", "stacked_cache": true
        },
        {
            "name": "Intel Core 2 Duo E8400", "tdp_watts": 65, "release_year": 2008,
            "base_ghz": 3.0, "vendor": "intel"
        }
    ],
    "coolers": [
        {
            "name": "Cooler Master Hyper 212", "kind": { "type": "air", "tier": "mainstream" },
            "rated_watts": 150, "noise_dba": 35, "lifetime_years": 5
        },
        {
            "name": "Noctua NH-D15", "kind": { "type": "air", "tier": "premium" },
            "rated_watts": 250, "noise_dba": 24, "lifetime_years": 8
        },
        {
            "name": "Generic 360 AIO", "kind": { "type": "liquid_aio", "radiator_mm": 360 },
            "rated_watts": 350, "noise_dba": 32, "lifetime_years": 6
        },
        {
            "name": "Cooler Master Hyper 212", "kind": { "type": "air", "tier": "budget" },
            "rated_watts": 95, "noise_dba": 28, "lifetime_years": 4
        }
    ]
}"#;

pub(crate) fn nominal_fraction() -> Constrained<Ratio, UnitInterval> {
    UnitInterval::new(Ratio::new::<percent>(95.0)).unwrap()
}

/// A 65 W Intel part released in `year`.
pub(crate) fn intel_cpu(year: u16) -> CpuSpec {
    CpuSpec {
        name: format!("Test Intel {year}"),
        tdp: StrictlyPositive::new(Power::new::<watt>(65.0)).unwrap(),
        release_year: year,
        base_frequency: Frequency::new::<gigahertz>(3.0),
        boost_frequency: Frequency::new::<gigahertz>(4.5),
        vendor: Vendor::Intel,
        microarchitecture: String::from("Test Lake"),
        die_stack: DieStack::Planar,
    }
}

/// A 105 W AMD part released in `year`.
pub(crate) fn amd_cpu(year: u16, die_stack: DieStack) -> CpuSpec {
    CpuSpec {
        name: format!("Test AMD {year}"),
        tdp: StrictlyPositive::new(Power::new::<watt>(105.0)).unwrap(),
        release_year: year,
        base_frequency: Frequency::new::<gigahertz>(3.4),
        boost_frequency: Frequency::new::<gigahertz>(4.6),
        vendor: Vendor::Amd,
        microarchitecture: String::from("Zen"),
        die_stack,
    }
}

pub(crate) fn air_cooler(tier: AirTier, rated_watts: f64) -> CoolerSpec {
    CoolerSpec::new(
        format!("Test {tier:?} tower"),
        CoolerKind::Air(tier),
        NonNegative::new(Power::new::<watt>(rated_watts)).unwrap(),
        NonNegative::new(30.0).unwrap(),
        6,
        nominal_fraction(),
    )
}

pub(crate) fn aio_cooler(radiator_mm: u16, rated_watts: f64) -> CoolerSpec {
    CoolerSpec::new(
        format!("Test {radiator_mm} mm AIO"),
        CoolerKind::LiquidAio { radiator_mm },
        NonNegative::new(Power::new::<watt>(rated_watts)).unwrap(),
        NonNegative::new(32.0).unwrap(),
        5,
        nominal_fraction(),
    )
}

/// Default parameters at the given ambient (°C) and workload (%).
pub(crate) fn params(ambient_celsius: f64, workload_percent: f64) -> SimulationParams {
    SimulationParams::new(
        ThermodynamicTemperature::new::<degree_celsius>(ambient_celsius),
        Ratio::new::<percent>(workload_percent),
    )
    .unwrap()
}
