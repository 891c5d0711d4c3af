//! Dashboard layout
//!
//! Describes the page's title, controls and chart placeholders. The layout is served as JSON and
//! embedded into the dashboard page, whose script builds the controls from it.

use crate::dataset::Dataset;
use crate::error::DashboardError;
use crate::models::{InputId, OutputId, ALL_SITES};

use std::collections::BTreeMap;

use serde::Serialize;

/// Dashboard title
pub const TITLE: &str = "SpaceX Launch Records Dashboard";

/// Lower end of the payload slider in kilograms
pub const SLIDER_MIN: f64 = 0.0;

/// Upper end of the payload slider in kilograms
pub const SLIDER_MAX: f64 = 10000.0;

/// Payload slider step in kilograms
pub const SLIDER_STEP: f64 = 1000.0;

/// Page template. `__LAYOUT__` is replaced by the layout JSON.
const PAGE_TEMPLATE: &str = include_str!("../static/index.html");

/// A dropdown option
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DropdownOption {
    /// Displayed label
    pub label: String,
    /// Value sent when selected
    pub value: String,
}

/// Launch site dropdown
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: InputId,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

/// Payload range slider
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: InputId,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Tick labels keyed by position
    pub marks: BTreeMap<u32, String>,
    /// Initial `[low, high]` value
    pub value: [f64; 2],
}

/// Dashboard layout
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub site_dropdown: Dropdown,
    pub payload_slider: RangeSlider,
    /// Chart placeholders, in page order
    pub charts: Vec<OutputId>,
}

impl Layout {
    /// Build the layout for a dataset.
    ///
    /// The dropdown offers all sites followed by each launch site in the dataset. The slider
    /// starts at the dataset's payload bounds.
    pub fn new(dataset: &Dataset) -> Self {
        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(dataset.sites().into_iter().map(|site| DropdownOption {
            label: site.to_string(),
            value: site.to_string(),
        }));

        let marks = (0..=10000)
            .step_by(1000)
            .map(|mark: u32| (mark, mark.to_string()))
            .collect();

        Layout {
            title: TITLE.to_string(),
            site_dropdown: Dropdown {
                id: InputId::SiteDropdown,
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site".to_string(),
                searchable: true,
            },
            payload_slider: RangeSlider {
                id: InputId::PayloadSlider,
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                marks,
                value: [dataset.min_payload(), dataset.max_payload()],
            },
            charts: vec![OutputId::SuccessPieChart, OutputId::SuccessPayloadScatter],
        }
    }

    /// Render the dashboard page.
    pub fn render_page(&self) -> Result<String, DashboardError> {
        // Keep the embedded JSON from closing the script element.
        let json = serde_json::to_string(self)?.replace("</", "<\\/");
        Ok(PAGE_TEMPLATE
            .replace("__TITLE__", &self.title)
            .replace("__LAYOUT__", &json))
    }
}
