//! Client-side token storage and unverified claims decoding.
//!
//! Two tokens are kept (admin and participant) and one is picked per
//! request by route. Decoding never verifies the signature: the claims
//! drive cosmetic UI gating only, and the backend re-checks
//! authorization on every call.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use domain::Role;

use crate::error::ClientError;

/// Which token slot a request draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenScope {
    Admin,
    Participant,
}

impl TokenScope {
    /// Admin endpoints live under `/admin`; everything else uses the
    /// participant token.
    pub fn for_path(path: &str) -> Self {
        let path = path.trim_start_matches('/');
        if path == "admin" || path.starts_with("admin/") {
            TokenScope::Admin
        } else {
            TokenScope::Participant
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn role(&self) -> Option<Role> {
        match self.role.as_str() {
            "ADMIN" | "ADMINISTRADOR" => Some(Role::Admin),
            "PARTICIPANT" | "PARTICIPANTE" => Some(Role::Participant),
            _ => None,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}

/// Decode the payload segment of a JWT without verifying its signature.
pub fn decode_claims(token: &str) -> Result<Claims, ClientError> {
    let segments: Vec<&str> = token.split('.').collect();
    let payload = match segments.as_slice() {
        [_header, payload, _signature] => *payload,
        _ => return Err(ClientError::Token("not a three-segment JWT".into())),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| ClientError::Token(format!("payload is not base64url: {}", e)))?;

    serde_json::from_slice(&bytes).map_err(ClientError::from)
}

#[derive(Debug, Default)]
struct Slots {
    admin: Option<String>,
    participant: Option<String>,
}

/// In-process replacement for the browser's two localStorage keys.
#[derive(Debug, Default)]
pub struct TokenStore {
    slots: RwLock<Slots>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, scope: TokenScope, token: impl Into<String>) {
        let mut slots = self.slots.write();
        match scope {
            TokenScope::Admin => slots.admin = Some(token.into()),
            TokenScope::Participant => slots.participant = Some(token.into()),
        }
    }

    pub fn get(&self, scope: TokenScope) -> Option<String> {
        let slots = self.slots.read();
        match scope {
            TokenScope::Admin => slots.admin.clone(),
            TokenScope::Participant => slots.participant.clone(),
        }
    }

    pub fn clear(&self, scope: TokenScope) {
        let mut slots = self.slots.write();
        match scope {
            TokenScope::Admin => slots.admin = None,
            TokenScope::Participant => slots.participant = None,
        }
    }

    pub fn clear_all(&self) {
        *self.slots.write() = Slots::default();
    }

    /// Claims of the stored token, if one exists and decodes.
    pub fn claims(&self, scope: TokenScope) -> Option<Claims> {
        self.get(scope).and_then(|t| decode_claims(&t).ok())
    }

    pub fn is_authenticated(&self, scope: TokenScope, now: DateTime<Utc>) -> bool {
        self.claims(scope)
            .map(|c| !c.is_expired(now))
            .unwrap_or(false)
    }
}
