//! Client-side input checks run before a request is made. The backend
//! re-validates everything; failing early here just gives the form a
//! message without a round trip.
//!
//! Input structs serialize straight into the backend's wire field names.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ClientError;

fn fail(msg: impl Into<String>) -> Result<(), ClientError> {
    Err(ClientError::Validation(msg.into()))
}

fn require_email(email: &str) -> Result<(), ClientError> {
    // The form schema only checks shape; the backend owns real parsing.
    let well_formed = email
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
        .unwrap_or(false);
    if !well_formed {
        return fail(format!("invalid email format: {}", email));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn validate(&self) -> Result<(), ClientError> {
        require_email(&self.email)?;
        if self.password.chars().count() < 4 {
            return fail("password must be at least 4 characters");
        }
        Ok(())
    }
}

/// `POST /account` — participant sign-up.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "documentoTipo")]
    pub document_type: String,
    #[serde(rename = "documentoNumero")]
    pub document_number: String,
}

impl RegisterInput {
    pub fn validate(&self) -> Result<(), ClientError> {
        require_email(&self.email)?;
        if self.password.chars().count() < 4 {
            return fail("password must be at least 4 characters");
        }
        if self.first_name.chars().count() < 2 {
            return fail("first name must be at least 2 characters");
        }
        if self.last_name.chars().count() < 2 {
            return fail("last name must be at least 2 characters");
        }
        if self.document_type.is_empty() {
            return fail("a document type must be selected");
        }
        if self.document_number.chars().count() < 6
            || !self.document_number.chars().all(|c| c.is_ascii_digit())
        {
            return fail("document number must be at least 6 digits");
        }
        Ok(())
    }
}

/// `POST /admin/accounts` — create an administrator.
#[derive(Debug, Clone, Serialize)]
pub struct AdminAccountInput {
    pub email: String,
    pub password: String,
    #[serde(rename = "nombre")]
    pub name: String,
}

impl AdminAccountInput {
    pub fn validate(&self) -> Result<(), ClientError> {
        require_email(&self.email)?;
        if self.password.chars().count() < 6 {
            return fail("password must be at least 6 characters");
        }
        Ok(())
    }
}

/// `PUT /admin/accounts/{id}` — password only changes when provided.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateAdminAccountInput {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UpdateAdminAccountInput {
    pub fn validate(&self) -> Result<(), ClientError> {
        require_email(&self.email)?;
        if let Some(password) = &self.password {
            if password.chars().count() < 6 {
                return fail("password must be at least 6 characters");
            }
        }
        Ok(())
    }
}

/// `POST /admin/tournaments` — tournaments are created as drafts.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTournamentInput {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "fechaInicio")]
    pub start_date: DateTime<Utc>,
    #[serde(rename = "fechaFin")]
    pub end_date: DateTime<Utc>,
}

impl CreateTournamentInput {
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.name.chars().count() < 3 {
            return fail("tournament name must be at least 3 characters");
        }
        if self.description.is_empty() {
            return fail("a description is required");
        }
        if self.end_date < self.start_date {
            return fail("end date cannot precede the start date");
        }
        Ok(())
    }
}

/// `PUT /admin/tournaments/{id}` — partial edit of a draft.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTournamentInput {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "fechaInicio", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(rename = "fechaFin", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl UpdateTournamentInput {
    pub fn validate(&self) -> Result<(), ClientError> {
        if let Some(name) = &self.name {
            if name.chars().count() < 3 {
                return fail("tournament name must be at least 3 characters");
            }
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return fail("end date cannot precede the start date");
            }
        }
        Ok(())
    }
}

/// `POST /admin/tournaments/{id}/competitions`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCompetitionInput {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "precio")]
    pub price: i64,
    #[serde(rename = "cupo")]
    pub capacity: u32,
}

impl CreateCompetitionInput {
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.name.chars().count() < 2 {
            return fail("competition name must be at least 2 characters");
        }
        if self.price < 0 {
            return fail("price cannot be negative");
        }
        if self.capacity < 1 {
            return fail("capacity must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn login_requires_email_shape_and_password_length() {
        let ok = LoginInput {
            email: "ana@example.com".into(),
            password: "1234".into(),
        };
        ok.validate().unwrap();

        let bad_email = LoginInput {
            email: "ana-at-example".into(),
            ..ok.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = LoginInput {
            password: "123".into(),
            ..ok
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn register_checks_document_number_digits() {
        let input = RegisterInput {
            email: "ana@example.com".into(),
            password: "1234".into(),
            first_name: "Ana".into(),
            last_name: "Pérez".into(),
            document_type: "DNI".into(),
            document_number: "30123456".into(),
        };
        input.validate().unwrap();

        let letters = RegisterInput {
            document_number: "3012345a".into(),
            ..input.clone()
        };
        assert!(letters.validate().is_err());

        let short = RegisterInput {
            document_number: "30123".into(),
            ..input
        };
        assert!(short.validate().is_err());
    }

    #[test]
    fn tournament_input_rejects_inverted_dates() {
        let start = Utc.with_ymd_and_hms(2026, 9, 10, 9, 0, 0).unwrap();
        let input = CreateTournamentInput {
            name: "Copa".into(),
            description: "Anual".into(),
            start_date: start,
            end_date: start - chrono::Duration::days(1),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn tournament_input_serializes_wire_field_names() {
        let start = Utc.with_ymd_and_hms(2026, 9, 10, 9, 0, 0).unwrap();
        let input = CreateTournamentInput {
            name: "Copa".into(),
            description: "Anual".into(),
            start_date: start,
            end_date: start,
        };

        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("nombre").is_some());
        assert!(json.get("fechaInicio").is_some());
        assert!(json.get("name").is_none());
    }

    #[test]
    fn competition_input_bounds() {
        let input = CreateCompetitionInput {
            name: "Singles A".into(),
            description: None,
            price: 20_000,
            capacity: 16,
        };
        input.validate().unwrap();

        assert!(CreateCompetitionInput {
            capacity: 0,
            ..input.clone()
        }
        .validate()
        .is_err());
        assert!(CreateCompetitionInput {
            price: -1,
            ..input
        }
        .validate()
        .is_err());
    }

    #[test]
    fn update_admin_allows_missing_password() {
        let input = UpdateAdminAccountInput {
            email: "root@example.com".into(),
            password: None,
        };
        input.validate().unwrap();

        let short = UpdateAdminAccountInput {
            email: "root@example.com".into(),
            password: Some("12345".into()),
        };
        assert!(short.validate().is_err());
    }
}
