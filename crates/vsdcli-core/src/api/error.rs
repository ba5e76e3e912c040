use serde::Deserialize;
use thiserror::Error;

/// Every failure is fatal to the invocation: there is no retry or local
/// recovery anywhere in the client. The variants exist so the frontend can
/// exit with the right user-facing message, not to support handling.
#[derive(Error, Debug)]
pub enum VsdError {
    /// HTTP 401 from any call, including mid-pagination.
    #[error("Authentication failed. Please verify your credentials.")]
    AuthenticationFailed,

    /// Non-2xx response with a parsable VSD error body; carries the first
    /// nested description.
    #[error("{0}")]
    Api(String),

    /// Non-2xx response whose body is not the structured error shape.
    #[error("Unknown error: VSD returns\n{0}")]
    UnknownApi(String),

    /// Connection refused, DNS failure, timeout.
    #[error("Unable to connect.\nDetail: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Unable to write credential cache: {0}")]
    Cache(String),
}

impl VsdError {
    /// Classify a non-2xx, non-401 response body.
    pub fn from_error_body(body: &str) -> Self {
        match first_description(body) {
            Some(description) => VsdError::Api(description),
            None => VsdError::UnknownApi(body.to_string()),
        }
    }
}

impl From<reqwest::header::InvalidHeaderValue> for VsdError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        VsdError::InvalidHeader(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderName> for VsdError {
    fn from(err: reqwest::header::InvalidHeaderName) -> Self {
        VsdError::InvalidHeader(err.to_string())
    }
}

// VSD error payload: {"errors": [{"descriptions": [{"description": "..."}]}]}
#[derive(Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    #[serde(default)]
    descriptions: Vec<ErrorDescription>,
}

#[derive(Deserialize)]
struct ErrorDescription {
    description: String,
}

fn first_description(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .errors
        .into_iter()
        .next()?
        .descriptions
        .into_iter()
        .next()
        .map(|d| d.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_nested_description() {
        let body = r#"{"errors":[{"property":"name","descriptions":[{"title":"Duplicate object","description":"Object already exists."}]}],"internalErrorCode":2002}"#;
        match VsdError::from_error_body(body) {
            VsdError::Api(message) => assert_eq!(message, "Object already exists."),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn falls_back_to_raw_body() {
        let body = "<html><head><title>JBoss - Error report</title></head></html>";
        match VsdError::from_error_body(body) {
            VsdError::UnknownApi(raw) => assert!(raw.contains("JBoss")),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
