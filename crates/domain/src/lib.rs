//! Pure decision module for the tournament registration platform.
//!
//! Everything here is synchronous and side-effect free: callers hand in
//! snapshots (tournament, competition, prior-registration count) plus an
//! explicit `now`, and get back either a value or a typed rejection.
//! Capacity races are arbitrated by the backend store, not here — the
//! evaluator only reflects the counters it is given at call time.

pub mod eligibility;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod pricing;

pub use error::DomainError;
pub use lifecycle::{LifecycleState, TournamentAction};
pub use model::{Account, Competition, Money, Registration, Role, Tournament};
