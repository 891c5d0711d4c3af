//! This crate provides an interactive dashboard of historical rocket launch outcomes.
//!
//! A table of launch records is loaded from CSV once at startup. The dashboard page offers a
//! launch site dropdown and a payload mass range slider; changing either re-renders a pie chart of
//! launch outcomes and a scatter chart of payload mass against outcome.
//!
//! The dashboard is built on top of a number of open source components.
//!
//! * [Tokio](tokio), the most popular asynchronous Rust runtime.
//! * [Axum](axum) web framework, built by the Tokio team, on top of the [hyper] HTTP library.
//! * [Serde](serde) performs (de)serialisation of JSON request and response data.
//! * [csv] reads the launch records.
//! * [plotly] builds the chart figures, which the page renders with plotly.js.

pub mod aggregate;
pub mod app;
pub mod app_state;
pub mod cli;
pub mod dataset;
pub mod dispatch;
pub mod error;
pub mod figures;
pub mod layout;
pub mod metrics;
pub mod models;
pub mod server;
#[cfg(test)]
pub mod test_utils;
pub mod tracing;
pub mod validated_json;
pub mod view;
pub mod views;
