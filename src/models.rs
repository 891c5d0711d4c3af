//! Data types and associated functions and methods

use crate::dataset::Outcome;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::Display;
use validator::{Validate, ValidationError};

/// Wire value of the "all sites" dropdown option.
pub const ALL_SITES: &str = "ALL";

/// Launch site selection
///
/// Deserialised from the dropdown value: [ALL_SITES] selects every site, any other string selects
/// a single site by exact name.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    /// Every launch site
    All,
    /// One launch site
    Site(String),
}

impl SiteSelection {
    /// Returns whether a record at `launch_site` is selected.
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            Self::All => true,
            Self::Site(site) => site == launch_site,
        }
    }
}

impl Default for SiteSelection {
    fn default() -> Self {
        Self::All
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(site: SiteSelection) -> String {
        match site {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "{}", ALL_SITES),
            Self::Site(site) => write!(f, "{}", site),
        }
    }
}

/// Inclusive payload mass bounds in kilograms
///
/// Bounds are not required to be ordered or to lie within the observed payload range; bounds
/// that admit no payload simply select nothing.
// NOTE: In serde, structs can be deserialised from sequences or maps. This allows us to support
// the slider's [<low>, <high>] value, with the convenience of named fields.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PayloadRange {
    /// Lower bound
    pub low: f64,
    /// Upper bound
    pub high: f64,
}

impl PayloadRange {
    /// Return a new PayloadRange object.
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// Returns whether `mass` lies within the bounds.
    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }
}

/// Named dashboard inputs
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InputId {
    /// Launch site dropdown
    SiteDropdown,
    /// Payload mass range slider
    PayloadSlider,
}

/// Named dashboard outputs
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OutputId {
    /// Pie chart of launch outcomes
    SuccessPieChart,
    /// Scatter chart of payload mass against outcome
    SuccessPayloadScatter,
}

/// Current value of every dashboard input
#[derive(Clone, Debug, Deserialize, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
pub struct Controls {
    /// Selected launch site
    #[validate(custom = "validate_site")]
    pub site: SiteSelection,
    /// Selected payload mass range
    pub payload_range: PayloadRange,
}

/// Request data for the update endpoint
#[derive(Debug, Deserialize, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateRequest {
    /// Inputs whose value changed
    #[validate(length(min = 1, message = "changed inputs must not be empty"))]
    pub changed: Vec<InputId>,
    /// Values of all inputs after the change
    #[validate]
    pub controls: Controls,
}

/// Validate a site selection
fn validate_site(site: &SiteSelection) -> Result<(), ValidationError> {
    if let SiteSelection::Site(site) = site {
        if site.is_empty() {
            return Err(ValidationError::new("site must not be empty"));
        }
    }
    Ok(())
}

/// Query string of the outcomes endpoint
#[derive(Debug, Default, Deserialize)]
pub struct OutcomesQuery {
    /// Selected launch site, defaults to all sites
    #[serde(default)]
    pub site: SiteSelection,
}

/// Query string of the payload outcomes endpoint
#[derive(Debug, Default, Deserialize)]
pub struct PayloadOutcomesQuery {
    /// Selected launch site, defaults to all sites
    #[serde(default)]
    pub site: SiteSelection,
    /// Lower payload bound, defaults to the smallest payload
    pub low: Option<f64>,
    /// Upper payload bound, defaults to the largest payload
    pub high: Option<f64>,
}

/// One slice of the outcome pie chart
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OutcomeSlice {
    /// Launch site name, or outcome flag for a single site
    pub label: String,
    /// Success count, or record count for a single site
    pub value: u64,
}

impl OutcomeSlice {
    /// Return a new OutcomeSlice object.
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        OutcomeSlice {
            label: label.into(),
            value,
        }
    }
}

/// One point of the payload scatter chart
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PayloadPoint {
    /// Payload mass in kilograms
    pub payload_mass_kg: f64,
    /// Launch outcome
    pub outcome: Outcome,
    /// Booster version category
    pub booster_version_category: String,
}

/// Rows of a reduced view
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Rows {
    /// Rows of the outcome aggregation
    Outcomes(Vec<OutcomeSlice>),
    /// Rows of the payload correlation
    PayloadPoints(Vec<PayloadPoint>),
}

impl Rows {
    /// Returns whether the view has no rows.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Outcomes(rows) => rows.is_empty(),
            Self::PayloadPoints(rows) => rows.is_empty(),
        }
    }
}

/// Value published to a dashboard output
#[derive(Clone, Debug, Serialize)]
pub struct Output {
    /// Reduced view rows
    pub rows: Rows,
    /// Plotly figure rendering the rows
    pub figure: serde_json::Value,
}

/// Response of the update endpoint
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    /// Recomputed outputs, keyed by output name
    pub outputs: BTreeMap<OutputId, Output>,
}
