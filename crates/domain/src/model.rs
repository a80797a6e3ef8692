use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::lifecycle::{LifecycleState, TournamentAction};

/// Integer minor-unit amount plus an ISO currency code.
///
/// Currency is passed through unchanged everywhere; no conversion occurs
/// in this module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: i64,
    pub currency: String,
}

impl Money {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Participant,
}

/// Snapshot of a tournament as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub state: LifecycleState,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub competitions: Vec<Competition>,
}

/// Patch applied to a Draft tournament; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateTournamentData {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl Tournament {
    fn reject(&self, action: TournamentAction) -> DomainError {
        DomainError::InvalidState {
            tournament_id: self.id,
            state: self.state,
            action,
        }
    }

    /// Draft → Published. Opens registration; irreversible.
    pub fn publish(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if !self.state.can_transition(LifecycleState::Published) {
            return Err(self.reject(TournamentAction::Publish));
        }
        self.state = LifecycleState::Published;
        self.updated_at = Some(now);
        Ok(())
    }

    /// Published → Finalized. Closes registration permanently; terminal.
    pub fn finalize(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if !self.state.can_transition(LifecycleState::Finalized) {
            return Err(self.reject(TournamentAction::Finalize));
        }
        self.state = LifecycleState::Finalized;
        self.updated_at = Some(now);
        Ok(())
    }

    /// Deletion is legal only while the tournament is still a draft.
    pub fn authorize_delete(&self) -> Result<(), DomainError> {
        if self.state != LifecycleState::Draft {
            return Err(self.reject(TournamentAction::Delete));
        }
        Ok(())
    }

    /// Name/description/date edits are legal only while Draft; a rejected
    /// patch leaves the snapshot untouched so the caller can render the
    /// record as read-only.
    pub fn apply_update(
        &mut self,
        data: UpdateTournamentData,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if self.state != LifecycleState::Draft {
            return Err(self.reject(TournamentAction::Edit));
        }

        let start = data.start_date.unwrap_or(self.start_date);
        let end = data.end_date.unwrap_or(self.end_date);
        if end < start {
            return Err(DomainError::InvalidDates {
                tournament_id: self.id,
                start,
                end,
            });
        }

        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(description) = data.description {
            self.description = Some(description);
        }
        self.start_date = start;
        self.end_date = end;
        self.updated_at = Some(now);
        Ok(())
    }

    /// True once the tournament has left Draft; the UI disables its form
    /// fields instead of surfacing an error.
    pub fn is_read_only(&self) -> bool {
        self.state != LifecycleState::Draft
    }

    pub fn allowed_actions(&self) -> Vec<TournamentAction> {
        self.state.allowed_actions()
    }
}

/// Snapshot of a competition category within a tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub id: i64,
    pub tournament_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub base_price: Money,
    pub capacity: u32,
    pub registered_count: u32,
}

impl Competition {
    /// Seats remaining before the category reads as full. Counters can
    /// briefly overshoot capacity on the backend; clamp instead of
    /// underflowing.
    pub fn seats_left(&self) -> u32 {
        self.capacity.saturating_sub(self.registered_count)
    }
}

/// A persisted registration echoed back by the backend. `amount_paid` is
/// authoritative; quotes from `pricing` are display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: i64,
    pub participant_id: i64,
    pub competition_id: i64,
    pub registered_at: DateTime<Utc>,
    pub amount_paid: Money,
}

/// Participant or administrator account. Soft-deleted accounts keep their
/// row and carry a deactivation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub deactivated_at: Option<DateTime<Utc>>,
}

impl Account {
    pub fn is_active(&self) -> bool {
        self.deactivated_at.is_none()
    }
}
