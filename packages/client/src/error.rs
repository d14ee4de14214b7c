use crate::types::{OpResult, Outcome};

/// Errors raised below the facade boundary.
///
/// Public filesystem operations never surface these; each operation flattens
/// them into [`OpResult`]/[`Outcome`] as its final step. The taxonomy stays
/// inspectable at the request layer.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{op} response is missing the `{field}` field")]
    MissingField {
        op: &'static str,
        field: &'static str,
    },

    #[error("{op} redirect carried no datanode location")]
    MissingLocation { op: &'static str },
}

impl<T> From<Result<T, Error>> for OpResult<T> {
    /// The catch-and-flatten step at the facade boundary: `Ok` becomes a
    /// successful result carrying the value, any error becomes
    /// `success = false` with no value.
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => OpResult {
                success: true,
                value: Some(value),
            },
            Err(error) => {
                tracing::debug!(%error, "operation failed");
                OpResult {
                    success: false,
                    value: None,
                }
            }
        }
    }
}

impl From<Result<bool, Error>> for Outcome {
    fn from(result: Result<bool, Error>) -> Self {
        match result {
            Ok(success) => Outcome { success },
            Err(error) => {
                tracing::debug!(%error, "mutation failed");
                Outcome { success: false }
            }
        }
    }
}
