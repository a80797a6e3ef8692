use thiserror::Error;

use crate::lifecycle::{LifecycleState, TournamentAction};

/// Expected, local rejections returned by the decision functions.
///
/// None of these are fatal: every variant is a normal branch the caller
/// surfaces to a human operator, leaving the system unchanged. Transient
/// transport failures are a separate class owned by the HTTP client.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("tournament {tournament_id} is {state} and does not permit {action}")]
    InvalidState {
        tournament_id: i64,
        state: LifecycleState,
        action: TournamentAction,
    },

    #[error("tournament {tournament_id} dates are invalid: end {end} precedes start {start}")]
    InvalidDates {
        tournament_id: i64,
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    #[error("registration for tournament {tournament_id} is closed: {reason}")]
    IneligibleRegistration { tournament_id: i64, reason: String },

    #[error("competition {competition_id} is full ({registered}/{capacity})")]
    CapacityExceeded {
        competition_id: i64,
        registered: u32,
        capacity: u32,
    },

    #[error("participant {participant_id} is already registered for competition {competition_id}")]
    DuplicateRegistration {
        participant_id: i64,
        competition_id: i64,
    },
}
