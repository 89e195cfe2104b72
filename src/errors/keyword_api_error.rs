use crate::common::*;

pub const KEYWORD_REQUIRED_MSG: &str = "Keyword is required";

/// Errors surfaced by the `/results` endpoint.
#[derive(Debug, thiserror::Error)]
pub enum KeywordApiError {
    #[error("{}", KEYWORD_REQUIRED_MSG)]
    Validation,

    /// Elasticsearch call failed; the message is forwarded to the caller as-is.
    #[error("{0}")]
    Backend(String),

    /// Elasticsearch answered but the aggregation payload has an unexpected shape.
    #[error("Malformed aggregation: {0}")]
    MalformedAggregation(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl KeywordApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Backend(_) | Self::MalformedAggregation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for KeywordApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::Backend(e.to_string())
    }
}

impl IntoResponse for KeywordApiError {
    fn into_response(self) -> HttpResponse {
        let status: StatusCode = self.status_code();
        let body: ErrorBody = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
