//! Error handling.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::header,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use thiserror::Error;
use tracing::{event, Level};

/// Launch dashboard error type
///
/// This type encapsulates the various errors that may occur, both while loading the launch
/// records at startup and while serving requests.
/// Each variant may result in a different API error response.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Error opening the launch data file
    #[error("failed to open launch data file {path}")]
    DataFileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error reading or deserialising a launch record
    #[error("launch data file is malformed")]
    DataFileMalformed(#[from] csv::Error),

    /// The launch data file lacks a required column
    #[error("launch data file is missing column {column}")]
    MissingColumn { column: &'static str },

    /// A launch record has a negative or non-finite payload mass
    #[error("launch record {record} has invalid payload mass {mass}")]
    InvalidPayload { record: usize, mass: f64 },

    /// The launch data contains no records
    #[error("launch data file contains no records")]
    EmptyDataset,

    /// Error serialising a chart figure
    #[error("failed to serialise chart figure")]
    FigureSerialisation(#[from] serde_json::Error),

    /// Error encoding metrics
    #[error("failed to encode metrics")]
    Metrics(#[from] prometheus::Error),

    /// Error deserialising request data
    #[error("request data is not valid")]
    RequestDataJsonRejection(#[from] JsonRejection),

    /// Error deserialising a request query string
    #[error("request query is not valid")]
    RequestQueryRejection(#[from] QueryRejection),

    /// Error validating request data (single error)
    #[error("request data is not valid")]
    RequestDataValidationSingle(#[from] validator::ValidationError),

    /// Error validating request data (multiple errors)
    #[error("request data is not valid")]
    RequestDataValidation(#[from] validator::ValidationErrors),
}

impl IntoResponse for DashboardError {
    /// Convert from a `DashboardError` into an [axum::response::Response].
    fn into_response(self) -> Response {
        ErrorResponse::from(self).into_response()
    }
}

/// Body of error response
///
/// Implements serde (de)serialise.
#[derive(Deserialize, Serialize)]
struct ErrorBody {
    /// Main error message
    message: String,

    /// Optional list of causes
    #[serde(skip_serializing_if = "Option::is_none")]
    caused_by: Option<Vec<String>>,
}

impl ErrorBody {
    /// Return a new ErrorBody
    ///
    /// # Arguments
    ///
    /// * `error`: The error that occurred
    fn new<E>(error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        let message = error.to_string();
        let mut causes = Vec::new();
        let mut current = error.source();
        while let Some(source) = current {
            causes.push(source.to_string());
            current = source.source();
        }
        // Remove duplicate entries.
        causes.dedup();
        let caused_by = if causes.is_empty() {
            None
        } else {
            Some(causes)
        };
        ErrorBody { message, caused_by }
    }
}

/// A response to send in error cases
///
/// Implements serde (de)serialise.
#[derive(Deserialize, Serialize)]
struct ErrorResponse {
    /// HTTP status of the response
    #[serde(skip)]
    status: StatusCode,

    /// Response body
    error: ErrorBody,
}

impl ErrorResponse {
    /// Return a new ErrorResponse
    ///
    /// # Arguments
    ///
    /// * `status`: HTTP status of the response
    /// * `error`: The error that occurred. This will be formatted into a suitable `ErrorBody`
    fn new<E>(status: StatusCode, error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        ErrorResponse {
            status,
            error: ErrorBody::new(error),
        }
    }

    /// Return a 400 bad request ErrorResponse
    fn bad_request<E>(error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    /// Return a 500 internal server error ErrorResponse
    fn internal_server_error<E>(error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
    }
}

impl From<DashboardError> for ErrorResponse {
    /// Convert from a `DashboardError` into an `ErrorResponse`.
    fn from(error: DashboardError) -> Self {
        let response = match &error {
            // Bad request
            DashboardError::RequestDataJsonRejection(_)
            | DashboardError::RequestQueryRejection(_)
            | DashboardError::RequestDataValidationSingle(_)
            | DashboardError::RequestDataValidation(_) => Self::bad_request(&error),

            // Internal server error
            DashboardError::DataFileOpen { .. }
            | DashboardError::DataFileMalformed(_)
            | DashboardError::MissingColumn { .. }
            | DashboardError::InvalidPayload { .. }
            | DashboardError::EmptyDataset
            | DashboardError::FigureSerialisation(_)
            | DashboardError::Metrics(_) => Self::internal_server_error(&error),
        };

        // Log server errors.
        if response.status.is_server_error() {
            event!(Level::ERROR, "{}", error.to_string());
            let mut current = error.source();
            while let Some(source) = current {
                event!(Level::ERROR, "Caused by: {}", source.to_string());
                current = source.source();
            }
        }

        response
    }
}

impl IntoResponse for ErrorResponse {
    /// Convert from an `ErrorResponse` into an `axum::response::Response`.
    ///
    /// Renders the response as JSON.
    fn into_response(self) -> Response {
        let json_body = serde_json::to_string_pretty(&self);
        match json_body {
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialise error response: {}", err),
            )
                .into_response(),
            Ok(json_body) => (
                self.status,
                [(&header::CONTENT_TYPE, mime::APPLICATION_JSON.to_string())],
                json_body,
            )
                .into_response(),
        }
    }
}
