//! Plotly figures for the dashboard charts.
//!
//! Figures are built with the [plotly] crate and handed to the page as JSON, where plotly.js
//! renders them.

use crate::error::DashboardError;
use crate::models::{OutcomeSlice, PayloadPoint};

use std::collections::BTreeMap;

use plotly::common::{Marker, MarkerSymbol, Mode, Title};
use plotly::layout::{Axis, Layout};
use plotly::{Pie, Plot, Scatter};

/// Marker symbols cycled through booster version categories.
const SYMBOLS: [MarkerSymbol; 6] = [
    MarkerSymbol::Circle,
    MarkerSymbol::Diamond,
    MarkerSymbol::Square,
    MarkerSymbol::X,
    MarkerSymbol::Cross,
    MarkerSymbol::TriangleUp,
];

/// Convert a plot into its JSON figure.
fn to_figure(plot: &Plot) -> Result<serde_json::Value, DashboardError> {
    Ok(serde_json::from_str(&plot.to_json())?)
}

/// Build a pie chart of outcome slices.
///
/// # Arguments
///
/// * `slices`: One slice per label
/// * `title`: Chart title
pub fn pie_figure(
    slices: &[OutcomeSlice],
    title: &str,
) -> Result<serde_json::Value, DashboardError> {
    let labels: Vec<String> = slices.iter().map(|slice| slice.label.clone()).collect();
    let values: Vec<u64> = slices.iter().map(|slice| slice.value).collect();
    let trace = Pie::new(values).labels(labels);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(Layout::new().title(Title::from(title)));
    to_figure(&plot)
}

/// Build a scatter chart of payload mass against launch outcome.
///
/// Points are grouped into one trace per booster version category, in category order, so that
/// each category gets its own colour and marker symbol. A category's symbol follows its position
/// in `categories`, so it does not change when a selection hides other categories.
///
/// # Arguments
///
/// * `points`: Points to plot
/// * `categories`: Every booster version category of the dataset, sorted
/// * `title`: Chart title
pub fn scatter_figure(
    points: &[PayloadPoint],
    categories: &[&str],
    title: &str,
) -> Result<serde_json::Value, DashboardError> {
    let mut groups: BTreeMap<&str, Vec<&PayloadPoint>> = BTreeMap::new();
    for point in points {
        groups
            .entry(point.booster_version_category.as_str())
            .or_default()
            .push(point);
    }

    let mut plot = Plot::new();
    for (index, (category, points)) in groups.into_iter().enumerate() {
        let x: Vec<f64> = points.iter().map(|point| point.payload_mass_kg).collect();
        let y: Vec<u8> = points.iter().map(|point| point.outcome.flag()).collect();
        let position = categories
            .iter()
            .position(|known| *known == category)
            .unwrap_or(categories.len() + index);
        let symbol = SYMBOLS[position % SYMBOLS.len()].clone();
        let trace = Scatter::new(x, y)
            .mode(Mode::Markers)
            .name(category)
            .marker(Marker::new().symbol(symbol).size(10));
        plot.add_trace(trace);
    }
    plot.set_layout(
        Layout::new()
            .title(Title::from(title))
            .x_axis(Axis::new().title(Title::from("Payload Mass (kg)")))
            .y_axis(Axis::new().title(Title::from("class"))),
    );
    to_figure(&plot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Outcome;

    #[test]
    fn pie() {
        let slices = vec![
            OutcomeSlice::new("KSC LC-39A", 10),
            OutcomeSlice::new("VAFB SLC-4E", 4),
        ];
        let figure = pie_figure(&slices, "Total success launches by sites").unwrap();
        let trace = &figure["data"][0];
        assert_eq!("pie", trace["type"]);
        assert_eq!(serde_json::json!(["KSC LC-39A", "VAFB SLC-4E"]), trace["labels"]);
        assert_eq!(serde_json::json!([10, 4]), trace["values"]);
        assert_eq!(
            "Total success launches by sites",
            figure["layout"]["title"]["text"]
        );
    }

    #[test]
    fn pie_empty() {
        let figure = pie_figure(&[], "empty").unwrap();
        assert_eq!(serde_json::json!([]), figure["data"][0]["values"]);
    }

    #[test]
    fn scatter_groups_by_category() {
        let point = |mass: f64, outcome: Outcome, category: &str| PayloadPoint {
            payload_mass_kg: mass,
            outcome,
            booster_version_category: category.to_string(),
        };
        let points = vec![
            point(5000.0, Outcome::Success, "FT"),
            point(3000.0, Outcome::Failure, "B4"),
            point(9000.0, Outcome::Success, "FT"),
        ];
        let figure = scatter_figure(&points, &["B4", "FT"], "Correlation").unwrap();
        let traces = figure["data"].as_array().unwrap();
        assert_eq!(2, traces.len());

        assert_eq!("scatter", traces[0]["type"]);
        assert_eq!("markers", traces[0]["mode"]);
        assert_eq!("B4", traces[0]["name"]);
        assert_eq!(serde_json::json!([3000.0]), traces[0]["x"]);
        assert_eq!(serde_json::json!([0]), traces[0]["y"]);

        assert_eq!("FT", traces[1]["name"]);
        assert_eq!(serde_json::json!([5000.0, 9000.0]), traces[1]["x"]);
        assert_eq!(serde_json::json!([1, 1]), traces[1]["y"]);
        assert_ne!(traces[0]["marker"]["symbol"], traces[1]["marker"]["symbol"]);

        assert_eq!("Correlation", figure["layout"]["title"]["text"]);
    }

    #[test]
    fn scatter_symbol_follows_category() {
        let point = PayloadPoint {
            payload_mass_kg: 5000.0,
            outcome: Outcome::Success,
            booster_version_category: "FT".to_string(),
        };
        let both = scatter_figure(&[point.clone()], &["B4", "FT"], "all").unwrap();
        let alone = scatter_figure(&[point], &["FT"], "one").unwrap();
        let symbol = |index: usize| serde_json::to_value(&SYMBOLS[index]).unwrap();
        assert_eq!(symbol(1), both["data"][0]["marker"]["symbol"]);
        assert_eq!(symbol(0), alone["data"][0]["marker"]["symbol"]);
    }

    #[test]
    fn scatter_empty() {
        let figure = scatter_figure(&[], &[], "empty").unwrap();
        assert!(figure["data"].as_array().unwrap().is_empty());
    }
}
