use crate::dataset::Dataset;
use crate::error::DashboardError;
use crate::models;

/// Trait for dashboard views.
///
/// This forms the contract between the dispatcher and the chart views. Each view reduces the
/// dataset according to the current controls and renders the result as a figure.
pub trait View {
    /// Output to which the view is published.
    const OUTPUT: models::OutputId;

    /// Inputs whose changes require the view to be recomputed.
    const INPUTS: &'static [models::InputId];

    /// Render the view.
    ///
    /// Returns a [models::Output](crate::models::Output) holding the reduced rows and their
    /// figure.
    ///
    /// # Arguments
    ///
    /// * `dataset`: Launch records
    /// * `controls`: Current dashboard control values
    fn render(
        dataset: &Dataset,
        controls: &models::Controls,
    ) -> Result<models::Output, DashboardError>;
}
