//! Input change dispatch
//!
//! The dashboard page reports which of its named inputs changed along with the current value of
//! every input. The [Dispatcher] re-renders each view bound to a changed input and publishes the
//! results under the views' output names.

use crate::dataset::Dataset;
use crate::error::DashboardError;
use crate::models::{Controls, InputId, Output, OutputId};
use crate::view::View;
use crate::views;

use std::collections::BTreeMap;

use tracing::{event, Level};

/// Function rendering an output from the dataset and controls.
type RenderFn = fn(&Dataset, &Controls) -> Result<Output, DashboardError>;

/// Binding of a view to its output and the inputs it depends on.
pub struct Binding {
    /// Output to which the view is published
    pub output: OutputId,
    /// Inputs that trigger the view
    pub inputs: &'static [InputId],
    render: RenderFn,
}

impl Binding {
    /// Bind a [View].
    pub fn of<V: View>() -> Self {
        Binding {
            output: V::OUTPUT,
            inputs: V::INPUTS,
            render: V::render,
        }
    }

    /// Returns whether any of `changed` triggers this binding.
    fn triggered_by(&self, changed: &[InputId]) -> bool {
        self.inputs.iter().any(|input| changed.contains(input))
    }
}

/// Dispatcher of input changes to bound views.
pub struct Dispatcher {
    bindings: Vec<Binding>,
}

impl Dispatcher {
    /// Create a dispatcher with no bindings.
    pub fn empty() -> Self {
        Dispatcher { bindings: vec![] }
    }

    /// Create a dispatcher with the dashboard's chart views bound.
    pub fn new() -> Self {
        let mut dispatcher = Self::empty();
        dispatcher.bind(Binding::of::<views::SuccessPie>());
        dispatcher.bind(Binding::of::<views::PayloadScatter>());
        dispatcher
    }

    /// Add a binding.
    pub fn bind(&mut self, binding: Binding) {
        self.bindings.push(binding);
    }

    /// Returns the bindings in the order they were added.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Render every output bound to one of the `changed` inputs.
    ///
    /// # Arguments
    ///
    /// * `dataset`: Launch records
    /// * `changed`: Inputs whose value changed
    /// * `controls`: Current value of every input
    pub fn dispatch(
        &self,
        dataset: &Dataset,
        changed: &[InputId],
        controls: &Controls,
    ) -> Result<BTreeMap<OutputId, Output>, DashboardError> {
        let mut outputs = BTreeMap::new();
        for binding in self
            .bindings
            .iter()
            .filter(|binding| binding.triggered_by(changed))
        {
            event!(
                Level::DEBUG,
                "rendering {} for site {} and payload {:?}",
                binding.output,
                controls.site,
                controls.payload_range
            );
            let output = (binding.render)(dataset, controls)?;
            if output.rows.is_empty() {
                event!(Level::DEBUG, "{} has no rows", binding.output);
            }
            outputs.insert(binding.output, output);
        }
        Ok(outputs)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
