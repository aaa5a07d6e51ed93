use serde::Deserialize;
use thiserror::Error;
use uom::si::{
    f64::{Frequency, Power, Ratio},
    frequency::gigahertz,
    power::watt,
};

use crate::support::constraint::{
    Constrained, ConstraintError, NonNegative, StrictlyPositive, UnitInterval,
};

use super::{AirTier, CoolerKind, CoolerSpec, CpuSpec, DieStack, Vendor};

/// Lookup of CPU and cooler records by name.
pub trait Catalog {
    /// Returns the CPU with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CpuNotFound`] if no CPU has that name.
    fn cpu(&self, name: &str) -> Result<&CpuSpec, CatalogError>;

    /// Returns the cooler with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CoolerNotFound`] if no cooler has that name.
    fn cooler(&self, name: &str) -> Result<&CoolerSpec, CatalogError>;
}

/// Errors from loading or querying a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("CPU not found: {name}")]
    CpuNotFound { name: String },

    #[error("cooler not found: {name}")]
    CoolerNotFound { name: String },

    /// A record violates a numeric invariant (e.g. zero TDP).
    #[error("invalid record {name}")]
    InvalidRecord {
        name: String,
        #[source]
        source: ConstraintError,
    },

    #[error("malformed catalog JSON")]
    Json(#[from] serde_json::Error),
}

/// A catalog held in memory.
///
/// Names need not be unique; lookups return the first record with a
/// matching name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    cpus: Vec<CpuSpec>,
    coolers: Vec<CoolerSpec>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new(cpus: Vec<CpuSpec>, coolers: Vec<CoolerSpec>) -> Self {
        Self { cpus, coolers }
    }

    /// Loads a catalog from JSON.
    ///
    /// Each cooler's nominal capacity is derived from its rating with
    /// `nominal_fraction`.
    ///
    /// ```
    /// use cpu_cooling::support::{
    ///     constraint::UnitInterval,
    ///     hardware::{Catalog, InMemoryCatalog},
    /// };
    /// use uom::si::{f64::Ratio, power::watt, ratio::percent};
    ///
    /// let json = r#"{
    ///     "cpus": [{
    ///         "name": "Ryzen 5 3600", "tdp_watts": 65, "release_year": 2019,
    ///         "base_ghz": 3.6, "boost_ghz": 4.2, "vendor": "amd",
    ///         "microarchitecture": "Zen 2"
    ///     }],
    ///     "coolers": [{
    ///         "name": "Hyper 212", "kind": { "type": "air", "tier": "mainstream" },
    ///         "rated_watts": 150, "noise_dba": 35, "lifetime_years": 5
    ///     }]
    /// }"#;
    ///
    /// let fraction = UnitInterval::new(Ratio::new::<percent>(95.0)).unwrap();
    /// let catalog = InMemoryCatalog::from_json(json, fraction).unwrap();
    ///
    /// let cooler = catalog.cooler("Hyper 212").unwrap();
    /// assert!((cooler.nominal_capacity().get::<watt>() - 142.5).abs() < 1e-9);
    /// assert!(catalog.cpu("Ryzen 9 7950X").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the input is not a valid catalog
    /// document, or [`CatalogError::InvalidRecord`] if a record violates a
    /// numeric invariant.
    pub fn from_json(
        json: &str,
        nominal_fraction: Constrained<Ratio, UnitInterval>,
    ) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;

        let cpus = document
            .cpus
            .into_iter()
            .map(CpuRecord::into_spec)
            .collect::<Result<Vec<_>, _>>()?;

        let coolers = document
            .coolers
            .into_iter()
            .map(|record| record.into_spec(nominal_fraction))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { cpus, coolers })
    }

    #[must_use]
    pub fn cpus(&self) -> &[CpuSpec] {
        &self.cpus
    }

    #[must_use]
    pub fn coolers(&self) -> &[CoolerSpec] {
        &self.coolers
    }
}

impl Catalog for InMemoryCatalog {
    fn cpu(&self, name: &str) -> Result<&CpuSpec, CatalogError> {
        self.cpus
            .iter()
            .find(|cpu| cpu.name == name)
            .ok_or_else(|| CatalogError::CpuNotFound { name: name.into() })
    }

    fn cooler(&self, name: &str) -> Result<&CoolerSpec, CatalogError> {
        self.coolers
            .iter()
            .find(|cooler| cooler.name() == name)
            .ok_or_else(|| CatalogError::CoolerNotFound { name: name.into() })
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    cpus: Vec<CpuRecord>,
    #[serde(default)]
    coolers: Vec<CoolerRecord>,
}

#[derive(Debug, Deserialize)]
struct CpuRecord {
    name: String,
    tdp_watts: f64,
    release_year: u16,
    base_ghz: f64,
    boost_ghz: Option<f64>,
    vendor: Vendor,
    #[serde(default)]
    microarchitecture: String,
    #[serde(default)]
    stacked_cache: bool,
}

impl CpuRecord {
    fn into_spec(self) -> Result<CpuSpec, CatalogError> {
        let tdp = match StrictlyPositive::new(Power::new::<watt>(self.tdp_watts)) {
            Ok(tdp) => tdp,
            Err(source) => {
                return Err(CatalogError::InvalidRecord {
                    name: self.name,
                    source,
                });
            }
        };

        Ok(CpuSpec {
            tdp,
            release_year: self.release_year,
            base_frequency: Frequency::new::<gigahertz>(self.base_ghz),
            boost_frequency: Frequency::new::<gigahertz>(self.boost_ghz.unwrap_or(self.base_ghz)),
            vendor: self.vendor,
            microarchitecture: self.microarchitecture,
            die_stack: if self.stacked_cache {
                DieStack::StackedCache
            } else {
                DieStack::Planar
            },
            name: self.name,
        })
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum CoolerKindRecord {
    Air { tier: AirTier },
    LiquidAio { radiator_mm: u16 },
}

impl From<CoolerKindRecord> for CoolerKind {
    fn from(record: CoolerKindRecord) -> Self {
        match record {
            CoolerKindRecord::Air { tier } => CoolerKind::Air(tier),
            CoolerKindRecord::LiquidAio { radiator_mm } => CoolerKind::LiquidAio { radiator_mm },
        }
    }
}

#[derive(Debug, Deserialize)]
struct CoolerRecord {
    name: String,
    kind: CoolerKindRecord,
    rated_watts: f64,
    noise_dba: f64,
    lifetime_years: u32,
}

impl CoolerRecord {
    fn into_spec(
        self,
        nominal_fraction: Constrained<Ratio, UnitInterval>,
    ) -> Result<CoolerSpec, CatalogError> {
        let checked = NonNegative::new(Power::new::<watt>(self.rated_watts))
            .and_then(|rated| NonNegative::new(self.noise_dba).map(|noise| (rated, noise)));
        let (rated, noise) = match checked {
            Ok(checked) => checked,
            Err(source) => {
                return Err(CatalogError::InvalidRecord {
                    name: self.name,
                    source,
                });
            }
        };

        Ok(CoolerSpec::new(
            self.name,
            self.kind.into(),
            rated,
            noise,
            self.lifetime_years,
            nominal_fraction,
        ))
    }
}
