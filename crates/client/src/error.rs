use reqwest::StatusCode;
use thiserror::Error;

use crate::envelope::ApiProblem;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered with problem details.
    #[error("backend rejected the request ({status}): {problem}")]
    Api {
        status: StatusCode,
        problem: ApiProblem,
    },

    /// 401 from the backend; the stored token is no longer valid.
    #[error("session expired")]
    SessionExpired,

    #[error("transport error")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode response body")]
    Decode(#[from] serde_json::Error),

    #[error("invalid base url")]
    BaseUrl(#[from] url::ParseError),

    /// A wire value the client does not understand (e.g. an unknown
    /// lifecycle state string).
    #[error("malformed wire value: {0}")]
    Wire(String),

    /// The stored token is not a decodable JWT.
    #[error("invalid auth token: {0}")]
    Token(String),

    /// Client-side input validation failed before any request was made.
    #[error("invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Domain(#[from] domain::DomainError),
}
