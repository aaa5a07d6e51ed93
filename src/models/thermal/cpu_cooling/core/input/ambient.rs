use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

use super::InputError;

/// Room temperature around the machine.
///
/// Guaranteed to lie within [`Ambient::MIN_CELSIUS`, `Ambient::MAX_CELSIUS`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ambient(ThermodynamicTemperature);

impl Ambient {
    pub const MIN_CELSIUS: f64 = -10.0;
    pub const MAX_CELSIUS: f64 = 60.0;

    /// Constructs a validated ambient temperature.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::AmbientOutOfRange`] if the temperature is outside
    /// the supported range or is `NaN`.
    pub fn new(temperature: ThermodynamicTemperature) -> Result<Self, InputError> {
        Self::check(temperature.get::<degree_celsius>())?;
        Ok(Self(temperature))
    }

    /// Constructs a validated ambient temperature from degrees Celsius.
    ///
    /// # Errors
    ///
    /// See [`Ambient::new`].
    pub fn celsius(value: f64) -> Result<Self, InputError> {
        Self::check(value)?;
        Ok(Self(ThermodynamicTemperature::new::<degree_celsius>(value)))
    }

    fn check(celsius: f64) -> Result<(), InputError> {
        if (Self::MIN_CELSIUS..=Self::MAX_CELSIUS).contains(&celsius) {
            Ok(())
        } else {
            Err(InputError::AmbientOutOfRange { celsius })
        }
    }

    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.0
    }
}
