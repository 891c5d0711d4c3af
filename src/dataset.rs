//! Launch records and the in-memory dataset loaded at startup.

use crate::error::DashboardError;

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{event, Level};

/// Columns that must be present in the launch data file.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

/// Outcome of a launch attempt
///
/// Serialised as the `class` flag used in the launch data file.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    /// Launch failed (`0`)
    Failure,
    /// Launch succeeded (`1`)
    Success,
}

impl Outcome {
    /// Returns the class flag for this outcome.
    pub fn flag(self) -> u8 {
        match self {
            Self::Failure => 0,
            Self::Success => 1,
        }
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(Self::Failure),
            1 => Ok(Self::Success),
            _ => Err(format!("class must be 0 or 1, got {}", flag)),
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        outcome.flag()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.flag())
    }
}

/// A single launch attempt
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Launch pad identifier
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Payload mass in kilograms
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// Launch outcome
    #[serde(rename = "class")]
    pub outcome: Outcome,
    /// Booster version category, used to group points in the scatter view
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    /// Return a new LaunchRecord.
    pub fn new(
        launch_site: &str,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_version_category: &str,
    ) -> Self {
        LaunchRecord {
            launch_site: launch_site.to_string(),
            payload_mass_kg,
            outcome,
            booster_version_category: booster_version_category.to_string(),
        }
    }
}

/// Immutable table of launch records
///
/// The payload mass bounds are computed once on construction. There are no mutating methods:
/// every view of the data is a fresh projection or aggregation.
#[derive(Debug)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
}

impl Dataset {
    /// Build a dataset from in-memory records.
    ///
    /// Fails if there are no records or any payload mass is negative or not finite.
    pub fn new(records: Vec<LaunchRecord>) -> Result<Self, DashboardError> {
        if records.is_empty() {
            return Err(DashboardError::EmptyDataset);
        }
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;
        for (index, record) in records.iter().enumerate() {
            let mass = record.payload_mass_kg;
            if !mass.is_finite() || mass < 0.0 {
                return Err(DashboardError::InvalidPayload {
                    record: index + 1,
                    mass,
                });
            }
            min_payload = min_payload.min(mass);
            max_payload = max_payload.max(mass);
        }
        Ok(Dataset {
            records,
            min_payload,
            max_payload,
        })
    }

    /// Read a dataset from CSV data with a header row.
    ///
    /// Columns other than [REQUIRED_COLUMNS] are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DashboardError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader.headers()?;
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(DashboardError::MissingColumn { column });
            }
        }
        let records = reader
            .deserialize::<LaunchRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(records)
    }

    /// Read a dataset from a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DashboardError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DashboardError::DataFileOpen {
            path: path.display().to_string(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;
        event!(
            Level::INFO,
            "loaded {} launch records from {} (payload {} to {} kg)",
            dataset.len(),
            path.display(),
            dataset.min_payload,
            dataset.max_payload
        );
        Ok(dataset)
    }

    /// Returns all launch records.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Returns the number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// A dataset always holds at least one record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest payload mass in the dataset.
    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    /// Largest payload mass in the dataset.
    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Distinct launch sites, sorted by name.
    pub fn sites(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.launch_site.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct booster version categories, sorted by name.
    pub fn booster_categories(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.booster_version_category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
