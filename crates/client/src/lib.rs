//! Thin HTTP layer over the tournament-registration backend.
//!
//! The backend wraps every success in `{code, message, body}` and every
//! failure in problem details `{type, title, code, detail, instance}`;
//! this crate unwraps the envelope, surfaces problems as typed errors,
//! and exposes one service per resource. Tokens live in an in-process
//! store and are attached as the `authentication` header, choosing the
//! admin or participant slot by route — purely cosmetic gating, the
//! backend enforces authorization.

pub mod auth;
pub mod config;
pub mod dto;
pub mod envelope;
pub mod error;
pub mod http;
pub mod services;
pub mod validate;

pub use auth::{Claims, TokenScope, TokenStore};
pub use config::ApiConfig;
pub use envelope::{ApiProblem, ApiResponse, Paginated};
pub use error::ClientError;
pub use http::ApiClient;
