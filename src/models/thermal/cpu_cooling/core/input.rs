mod ambient;
mod error;
mod params;
mod presets;

pub use ambient::Ambient;
pub use error::InputError;
pub use params::SimulationParams;
pub use presets::{Ventilation, WorkloadProfile};
