//! Registration window and capacity checks.
//!
//! Pure and time-dependent only on the injected `now`; identical inputs
//! always yield the identical decision.

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::lifecycle::LifecycleState;
use crate::model::{Competition, Tournament};

/// A participant may register iff the tournament is Published and the
/// current instant is strictly before its start date. The end date plays
/// no role in the window.
pub fn can_register(tournament: &Tournament, now: DateTime<Utc>) -> bool {
    tournament.state == LifecycleState::Published && now < tournament.start_date
}

/// Capacity-full is a terminal display state, independent of the
/// tournament-level window.
pub fn is_full(competition: &Competition) -> bool {
    competition.registered_count >= competition.capacity
}

/// Combined gate for a registration attempt: window AND seats AND not a
/// duplicate, reported as the first applicable typed rejection.
///
/// `already_registered` is the caller's knowledge of an existing
/// (participant, competition) pair; uniqueness itself is enforced by the
/// backend.
pub fn check_registration(
    tournament: &Tournament,
    competition: &Competition,
    participant_id: i64,
    already_registered: bool,
    now: DateTime<Utc>,
) -> Result<(), DomainError> {
    if !can_register(tournament, now) {
        let reason = if tournament.state != LifecycleState::Published {
            format!("tournament is {}", tournament.state)
        } else {
            format!("registration closed at start date {}", tournament.start_date)
        };
        return Err(DomainError::IneligibleRegistration {
            tournament_id: tournament.id,
            reason,
        });
    }
    if is_full(competition) {
        return Err(DomainError::CapacityExceeded {
            competition_id: competition.id,
            registered: competition.registered_count,
            capacity: competition.capacity,
        });
    }
    if already_registered {
        return Err(DomainError::DuplicateRegistration {
            participant_id,
            competition_id: competition.id,
        });
    }
    Ok(())
}
