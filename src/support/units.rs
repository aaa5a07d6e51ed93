//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for physical units (power, temperature, time,
//! heat capacity). Two gaps are filled here:
//!
//! - [`ThermalResistance`]: `uom` has no K/W quantity, and the cooling chain
//!   is naturally expressed as resistances in series.
//! - [`TemperatureDifference`]: subtracting two absolute temperatures to get
//!   an interval, e.g. the rise of a die above ambient.
//!
//! ```
//! use cpu_cooling::support::units::{TemperatureDifference, ThermalResistance};
//! use uom::si::{
//!     f64::{Power, ThermodynamicTemperature},
//!     power::watt,
//!     temperature_interval::kelvin as delta_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let r = ThermalResistance::new(0.25).unwrap();
//! let rise = r.temperature_rise(Power::new::<watt>(100.0));
//! assert!((rise.get::<delta_kelvin>() - 25.0).abs() < 1e-12);
//!
//! let die = ThermodynamicTemperature::new::<degree_celsius>(60.0);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//! assert!((die.minus(ambient).get::<delta_kelvin>() - 35.0).abs() < 1e-12);
//! ```

mod temperature_difference;
mod thermal_resistance;

pub use temperature_difference::TemperatureDifference;
pub use thermal_resistance::ThermalResistance;
