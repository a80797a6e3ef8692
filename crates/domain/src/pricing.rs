//! Quote computation for the pre-confirmation dialog.
//!
//! Display-only: the authoritative charge is the `amount_paid` the
//! backend echoes on the persisted registration, and rendering must
//! reconcile against that rather than recompute.

use serde::{Deserialize, Serialize};

use crate::model::{Competition, Money};

/// Second and later registrations within the same tournament pay half.
const REPEAT_DISCOUNT_DIVISOR: i64 = 2;

/// Amount due for registering into `competition`, given how many
/// registrations the participant already holds in the same tournament.
/// Currency passes through unchanged.
pub fn price_for(competition: &Competition, prior_registrations_in_tournament: u32) -> Money {
    let base = &competition.base_price;
    let amount = if prior_registrations_in_tournament > 0 {
        base.amount / REPEAT_DISCOUNT_DIVISOR
    } else {
        base.amount
    };
    Money::new(amount, base.currency.clone())
}

/// Line items shown before the participant confirms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub base_price: Money,
    pub discount_applied: bool,
    pub total: Money,
}

pub fn quote(competition: &Competition, prior_registrations_in_tournament: u32) -> Quote {
    let total = price_for(competition, prior_registrations_in_tournament);
    Quote {
        base_price: competition.base_price.clone(),
        discount_applied: prior_registrations_in_tournament > 0,
        total,
    }
}
