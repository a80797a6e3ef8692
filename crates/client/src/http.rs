//! Reqwest wrapper that unwraps the backend envelope and attaches the
//! stored token to every outgoing request.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::auth::{TokenScope, TokenStore};
use crate::config::ApiConfig;
use crate::envelope::{ApiProblem, ApiResponse};
use crate::error::ClientError;

/// Request header carrying the token, as the backend expects it.
const AUTH_HEADER: &str = "authentication";

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    tokens: Arc<TokenStore>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, tokens: Arc<TokenStore>) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(&config.base_url)?;
        // Url::join replaces the last path segment unless the base ends
        // with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.execute(Method::GET, path, None::<&()>).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.execute(Method::POST, path, Some(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.execute(Method::PUT, path, Some(body)).await
    }

    /// PUT without a body, used by action endpoints such as
    /// `/admin/tournaments/{id}/publish`.
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.execute(Method::PUT, path, None::<&()>).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        // Deletion envelopes carry a null body.
        let _: Option<serde_json::Value> = self.execute(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    async fn execute<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        let mut request = self.http.request(method.clone(), url);

        if let Some(token) = self.tokens.get(TokenScope::for_path(path)) {
            request = request.header(AUTH_HEADER, token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let envelope: ApiResponse<T> = response.json().await?;
            tracing::debug!(code = envelope.code, "{} {}: {}", method, path, envelope.message);
            return Ok(envelope.body);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("{} {}: session expired", method, path);
            return Err(ClientError::SessionExpired);
        }

        let text = response.text().await?;
        let problem = serde_json::from_str::<ApiProblem>(&text).unwrap_or(ApiProblem {
            problem_type: "about:blank".to_string(),
            title: status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string(),
            code: i32::from(status.as_u16()),
            detail: (!text.is_empty()).then(|| text),
            instance: Some(path.to_string()),
        });

        tracing::error!("{} {}: {}", method, path, problem);
        Err(ClientError::Api { status, problem })
    }
}
