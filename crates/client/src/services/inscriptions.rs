//! Registration ("inscription") endpoints and the per-tournament status
//! a registration page needs: which competitions the participant already
//! holds and how many registrations they have in the tournament, which
//! drives the repeat discount quote.

use std::sync::Arc;

use domain::pricing::{self, Quote};
use domain::{Competition, Registration};

use crate::dto::InscriptionDto;
use crate::envelope::Paginated;
use crate::error::ClientError;
use crate::http::ApiClient;

#[derive(Clone)]
pub struct InscriptionService {
    client: Arc<ApiClient>,
}

/// What the participant already holds inside one tournament.
#[derive(Debug, Clone, Default)]
pub struct ParticipantStatus {
    pub registered_competition_ids: Vec<i64>,
    pub registrations_in_tournament: u32,
}

impl ParticipantStatus {
    pub fn is_registered_for(&self, competition_id: i64) -> bool {
        self.registered_competition_ids.contains(&competition_id)
    }

    /// Pre-confirmation quote for registering into `competition`,
    /// display-only; the backend's echoed `amount_paid` stays
    /// authoritative.
    pub fn quote_for(&self, competition: &Competition) -> Quote {
        pricing::quote(competition, self.registrations_in_tournament)
    }
}

impl InscriptionService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /tournaments/{t}/competitions/{c}/inscription`. The backend
    /// computes the charged amount; the echo is returned as-is.
    pub async fn create(
        &self,
        tournament_id: i64,
        competition_id: i64,
    ) -> Result<Registration, ClientError> {
        let dto: InscriptionDto = self
            .client
            .post(
                &format!(
                    "/tournaments/{}/competitions/{}/inscription",
                    tournament_id, competition_id
                ),
                &serde_json::json!({}),
            )
            .await?;
        Ok(dto.into())
    }

    /// `GET /inscriptions-participant/{id}` — every registration the
    /// participant holds, across tournaments.
    pub async fn list_for_participant(
        &self,
        participant_id: i64,
    ) -> Result<Paginated<Registration>, ClientError> {
        let page: Paginated<InscriptionDto> = self
            .client
            .get(&format!("/inscriptions-participant/{}", participant_id))
            .await?;
        page.try_map(|dto| Ok(dto.into()))
    }

    /// Status of one participant within one tournament, derived from the
    /// full inscription listing.
    pub async fn participant_status(
        &self,
        participant_id: i64,
        tournament_id: i64,
    ) -> Result<ParticipantStatus, ClientError> {
        let page: Paginated<InscriptionDto> = self
            .client
            .get(&format!("/inscriptions-participant/{}", participant_id))
            .await?;

        let mut status = ParticipantStatus::default();
        for inscription in &page.content {
            status
                .registered_competition_ids
                .push(inscription.competencia.id);
            if inscription.tournament_id() == Some(tournament_id) {
                status.registrations_in_tournament += 1;
            }
        }
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Money;

    fn competition() -> Competition {
        Competition {
            id: 11,
            tournament_id: 3,
            name: "Singles A".into(),
            description: None,
            base_price: Money::new(20_000, "ARS"),
            capacity: 16,
            registered_count: 4,
        }
    }

    #[test]
    fn status_tracks_registered_competitions() {
        let status = ParticipantStatus {
            registered_competition_ids: vec![11, 12],
            registrations_in_tournament: 1,
        };

        assert!(status.is_registered_for(11));
        assert!(!status.is_registered_for(13));
    }

    #[test]
    fn quote_applies_repeat_discount_from_status() {
        let fresh = ParticipantStatus::default();
        assert_eq!(fresh.quote_for(&competition()).total, Money::new(20_000, "ARS"));

        let repeat = ParticipantStatus {
            registered_competition_ids: vec![12],
            registrations_in_tournament: 1,
        };
        let quote = repeat.quote_for(&competition());
        assert!(quote.discount_applied);
        assert_eq!(quote.total, Money::new(10_000, "ARS"));
    }
}
