use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle of a tournament.
///
/// Draft is the initial state and the only mutable one; Published opens
/// registration; Finalized is terminal. Both transitions are irreversible
/// and no edge returns to an earlier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    Draft,
    Published,
    Finalized,
}

impl LifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Draft => "DRAFT",
            LifecycleState::Published => "PUBLISHED",
            LifecycleState::Finalized => "FINALIZED",
        }
    }

    /// Whether the single legal edge from `self` to `target` exists.
    pub fn can_transition(&self, target: LifecycleState) -> bool {
        matches!(
            (self, target),
            (LifecycleState::Draft, LifecycleState::Published)
                | (LifecycleState::Published, LifecycleState::Finalized)
        )
    }

    /// Finalized tournaments admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        *self == LifecycleState::Finalized
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(LifecycleState::Draft),
            "PUBLISHED" => Ok(LifecycleState::Published),
            "FINALIZED" => Ok(LifecycleState::Finalized),
            _ => Err(format!("Unknown lifecycle state: {}", s)),
        }
    }
}

/// Candidate actions an operator can attempt against a tournament.
///
/// The guard answers which of these a given state permits; role gating
/// (admin vs participant) happens outside this module and is cosmetic
/// on the client anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentAction {
    Publish,
    Finalize,
    Delete,
    Edit,
    RegisterParticipant,
}

impl fmt::Display for TournamentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TournamentAction::Publish => "publish",
            TournamentAction::Finalize => "finalize",
            TournamentAction::Delete => "delete",
            TournamentAction::Edit => "edit",
            TournamentAction::RegisterParticipant => "register-participant",
        };
        f.write_str(s)
    }
}

impl LifecycleState {
    /// Actions a state permits, in the order the UI renders its controls.
    ///
    /// RegisterParticipant appearing here only means the state does not
    /// forbid it; the registration window and capacity checks still apply
    /// (see `eligibility`).
    pub fn allowed_actions(&self) -> Vec<TournamentAction> {
        match self {
            LifecycleState::Draft => vec![
                TournamentAction::Edit,
                TournamentAction::Publish,
                TournamentAction::Delete,
            ],
            LifecycleState::Published => vec![
                TournamentAction::Finalize,
                TournamentAction::RegisterParticipant,
            ],
            LifecycleState::Finalized => vec![],
        }
    }

    pub fn allows(&self, action: TournamentAction) -> bool {
        self.allowed_actions().contains(&action)
    }
}
