//! Login, sign-up, and session handling.

use std::sync::Arc;

use crate::auth::{decode_claims, Claims, TokenScope};
use crate::dto::AuthResponseDto;
use crate::error::ClientError;
use crate::http::ApiClient;
use crate::validate::{LoginInput, RegisterInput};

/// Established session: the raw token is already in the store; the
/// claims drive cosmetic role gating only.
#[derive(Debug, Clone)]
pub struct Session {
    pub email: String,
    pub claims: Claims,
}

#[derive(Clone)]
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /auth` — participant login; stores the token in the
    /// participant slot.
    pub async fn participant_login(&self, input: &LoginInput) -> Result<Session, ClientError> {
        self.login("/auth", TokenScope::Participant, input).await
    }

    /// `POST /admin/auth` — administrator login; stores the token in the
    /// admin slot.
    pub async fn admin_login(&self, input: &LoginInput) -> Result<Session, ClientError> {
        self.login("/admin/auth", TokenScope::Admin, input).await
    }

    async fn login(
        &self,
        path: &str,
        scope: TokenScope,
        input: &LoginInput,
    ) -> Result<Session, ClientError> {
        input.validate()?;
        let response: AuthResponseDto = self.client.post(path, input).await?;
        let claims = decode_claims(&response.token)?;
        self.client.tokens().store(scope, response.token);
        tracing::info!(email = %response.email, "logged in as {:?}", scope);
        Ok(Session {
            email: response.email,
            claims,
        })
    }

    /// `POST /account` — participant sign-up; does not log in.
    pub async fn sign_up(&self, input: &RegisterInput) -> Result<(), ClientError> {
        input.validate()?;
        let _: Option<serde_json::Value> = self.client.post("/account", input).await?;
        Ok(())
    }

    pub fn logout(&self, scope: TokenScope) {
        self.client.tokens().clear(scope);
    }
}
