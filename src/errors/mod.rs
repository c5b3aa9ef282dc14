use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::fmt;

use crate::api::models::ErrorBody;

/// Failure of a single outbound request
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },
    #[error("could not connect to {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("malformed payload from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        let url = url.to_string();
        if error.is_timeout() {
            FetchError::Timeout { url }
        } else if error.is_connect() {
            FetchError::Connection { url, source: error }
        } else if let Some(status) = error.status() {
            FetchError::Status { url, status }
        } else {
            FetchError::Transport { url, source: error }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableKind {
    Timeout,
    Connection,
}

impl UnavailableKind {
    pub fn code(&self) -> &'static str {
        match self {
            UnavailableKind::Timeout => "TIMEOUT",
            UnavailableKind::Connection => "CONNECTION_ERROR",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            UnavailableKind::Timeout => {
                "Lichess API is currently unavailable. Please try again later."
            }
            UnavailableKind::Connection => {
                "Cannot connect to Lichess. Please check your internet connection."
            }
        }
    }
}

impl fmt::Display for UnavailableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableKind::Timeout => write!(f, "timeout"),
            UnavailableKind::Connection => write!(f, "connection"),
        }
    }
}

/// Error taxonomy reported to the dashboard
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("upstream unavailable ({kind}): {detail}")]
    UpstreamUnavailable { kind: UnavailableKind, detail: String },
    #[error("upstream error: {0}")]
    UpstreamError(String),
    #[error("invalid input: {0}")]
    Validation(String),
}

impl From<FetchError> for GatewayError {
    fn from(error: FetchError) -> Self {
        let detail = error.to_string();
        match error {
            FetchError::Timeout { .. } => GatewayError::UpstreamUnavailable {
                kind: UnavailableKind::Timeout,
                detail,
            },
            FetchError::Connection { .. } => GatewayError::UpstreamUnavailable {
                kind: UnavailableKind::Connection,
                detail,
            },
            FetchError::Status { .. } | FetchError::Transport { .. } | FetchError::Malformed { .. } => {
                GatewayError::UpstreamError(detail)
            }
        }
    }
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::UpstreamUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::UpstreamError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Map to an HTTP response. `fallback` is the message used for
    /// generic upstream failures of the calling route.
    pub fn into_api_error(self, fallback: &str) -> ApiError {
        let status = self.status();
        let body = match self {
            GatewayError::NotFound(_) => ErrorBody::new("User not found"),
            GatewayError::UpstreamUnavailable { kind, .. } => {
                ErrorBody::with_code(kind.message(), kind.code())
            }
            GatewayError::UpstreamError(_) => ErrorBody::new(fallback),
            GatewayError::Validation(message) => ErrorBody::new(message),
        };
        ApiError { status, body }
    }
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError {
            status: rejection.status(),
            body: ErrorBody::new(rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_maps_to_503_with_code() {
        let error = GatewayError::UpstreamUnavailable {
            kind: UnavailableKind::Timeout,
            detail: "request timed out".to_string(),
        };
        let api_error = error.into_api_error("Failed to fetch profiles");

        assert_eq!(api_error.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(api_error.body.code.as_deref(), Some("TIMEOUT"));
        assert!(api_error.body.error.contains("currently unavailable"));
    }

    #[test]
    fn test_connection_code() {
        let error = GatewayError::UpstreamUnavailable {
            kind: UnavailableKind::Connection,
            detail: "refused".to_string(),
        };
        let api_error = error.into_api_error("Failed to fetch tournaments");

        assert_eq!(api_error.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(api_error.body.code.as_deref(), Some("CONNECTION_ERROR"));
    }

    #[test]
    fn test_generic_failure_uses_route_message() {
        let error = GatewayError::from(FetchError::Status {
            url: "https://lichess.org/api/tournament".to_string(),
            status: StatusCode::BAD_GATEWAY,
        });
        let api_error = error.into_api_error("Failed to fetch tournaments");

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.body.error, "Failed to fetch tournaments");
        assert_eq!(api_error.body.code, None);
    }

    #[test]
    fn test_not_found_detection() {
        let missing = FetchError::Status {
            url: "u".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        let teapot = FetchError::Status {
            url: "u".to_string(),
            status: StatusCode::IM_A_TEAPOT,
        };

        assert!(missing.is_not_found());
        assert!(!teapot.is_not_found());
        assert!(!FetchError::Timeout { url: "u".to_string() }.is_not_found());
    }

    #[test]
    fn test_validation_is_bad_request() {
        let api_error = GatewayError::Validation("nb must be a positive integer".to_string())
            .into_api_error("Failed to fetch leaderboards");

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.body.error, "nb must be a positive integer");
    }
}
