//! Wire envelope shared by every backend endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Successful responses arrive as `{code, message, body}`; callers only
/// ever see the unwrapped `body`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub body: T,
}

/// Problem details attached to error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiProblem {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub code: i32,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub instance: Option<String>,
}

impl fmt::Display for ApiProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.title)?;
        if let Some(detail) = &self.detail {
            write!(f, " - {}", detail)?;
        }
        Ok(())
    }
}

/// Spring-style page wrapper used by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub size: i64,
    pub number: i64,
}

impl<T> Paginated<T> {
    /// Convert the page contents, keeping the paging counters.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Paginated<U>, E> {
        Ok(Paginated {
            content: self
                .content
                .into_iter()
                .map(f)
                .collect::<Result<Vec<_>, E>>()?,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            size: self.size,
            number: self.number,
        })
    }
}
