//! Chart views.
//!
//! Each view is implemented as a struct that implements the [View](crate::view::View) trait.

use crate::aggregate;
use crate::dataset::Dataset;
use crate::error::DashboardError;
use crate::figures;
use crate::models::{self, Controls, InputId, OutputId, SiteSelection};
use crate::view::View;

/// Pie chart of successful launches per site, or of outcomes at a single site.
pub struct SuccessPie {}

impl SuccessPie {
    fn title(site: &SiteSelection) -> String {
        match site {
            SiteSelection::All => "Total success launches by sites".to_string(),
            SiteSelection::Site(site) => format!("Total success launches for site {}", site),
        }
    }
}

impl View for SuccessPie {
    const OUTPUT: OutputId = OutputId::SuccessPieChart;
    const INPUTS: &'static [InputId] = &[InputId::SiteDropdown];

    fn render(dataset: &Dataset, controls: &Controls) -> Result<models::Output, DashboardError> {
        let slices = aggregate::aggregate_outcomes(dataset, &controls.site);
        let figure = figures::pie_figure(&slices, &Self::title(&controls.site))?;
        Ok(models::Output {
            rows: models::Rows::Outcomes(slices),
            figure,
        })
    }
}

/// Scatter chart of payload mass against launch outcome.
pub struct PayloadScatter {}

impl PayloadScatter {
    fn title(site: &SiteSelection) -> String {
        match site {
            SiteSelection::All => {
                "Correlation between Payload and Success for all sites".to_string()
            }
            SiteSelection::Site(site) => {
                format!("Correlation between Payload and Success for site {}", site)
            }
        }
    }
}

impl View for PayloadScatter {
    const OUTPUT: OutputId = OutputId::SuccessPayloadScatter;
    const INPUTS: &'static [InputId] = &[InputId::SiteDropdown, InputId::PayloadSlider];

    fn render(dataset: &Dataset, controls: &Controls) -> Result<models::Output, DashboardError> {
        let points = aggregate::correlate(dataset, &controls.site, controls.payload_range);
        let figure = figures::scatter_figure(
            &points,
            &dataset.booster_categories(),
            &Self::title(&controls.site),
        )?;
        Ok(models::Output {
            rows: models::Rows::PayloadPoints(points),
            figure,
        })
    }
}
