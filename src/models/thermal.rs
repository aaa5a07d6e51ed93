//! Thermal models.
//!
//! This module contains models for processor cooling: heat generation,
//! conduction through the cooler, and rejection to the surrounding air.

pub mod cpu_cooling;
