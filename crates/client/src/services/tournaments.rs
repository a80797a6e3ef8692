//! Tournament browsing plus the admin lifecycle endpoints.

use std::sync::Arc;

use domain::{Competition, Tournament};

use crate::dto::{CompetitionDto, TournamentDto};
use crate::envelope::Paginated;
use crate::error::ClientError;
use crate::http::ApiClient;
use crate::validate::{CreateCompetitionInput, CreateTournamentInput, UpdateTournamentInput};

#[derive(Clone)]
pub struct TournamentService {
    client: Arc<ApiClient>,
}

impl TournamentService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /tournaments` — published tournaments, public listing.
    pub async fn list_upcoming(&self) -> Result<Paginated<Tournament>, ClientError> {
        let page: Paginated<TournamentDto> = self.client.get("/tournaments").await?;
        page.try_map(Tournament::try_from)
    }

    /// `GET /tournaments/{id}`.
    pub async fn get(&self, id: i64) -> Result<Tournament, ClientError> {
        let dto: TournamentDto = self.client.get(&format!("/tournaments/{}", id)).await?;
        Tournament::try_from(dto)
    }

    /// `GET /tournaments/{id}/competitions`.
    pub async fn competitions(&self, id: i64) -> Result<Paginated<Competition>, ClientError> {
        let page: Paginated<CompetitionDto> = self
            .client
            .get(&format!("/tournaments/{}/competitions", id))
            .await?;
        page.try_map(|dto| Ok(dto.into_domain(id)))
    }

    /// `GET /admin/tournaments` — all tournaments including drafts.
    pub async fn list_all(&self) -> Result<Paginated<Tournament>, ClientError> {
        let page: Paginated<TournamentDto> = self.client.get("/admin/tournaments").await?;
        page.try_map(Tournament::try_from)
    }

    /// `POST /admin/tournaments` — created as a draft.
    pub async fn create(&self, input: &CreateTournamentInput) -> Result<Tournament, ClientError> {
        input.validate()?;
        let dto: TournamentDto = self.client.post("/admin/tournaments", input).await?;
        Tournament::try_from(dto)
    }

    /// `PUT /admin/tournaments/{id}` — draft-only edit; the backend
    /// answers with problem details on a non-draft tournament.
    pub async fn update(
        &self,
        id: i64,
        input: &UpdateTournamentInput,
    ) -> Result<Tournament, ClientError> {
        input.validate()?;
        let dto: TournamentDto = self
            .client
            .put(&format!("/admin/tournaments/{}", id), input)
            .await?;
        Tournament::try_from(dto)
    }

    /// `DELETE /admin/tournaments/{id}` — drafts only.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .delete(&format!("/admin/tournaments/{}", id))
            .await
    }

    /// `PUT /admin/tournaments/{id}/publish` — Draft → Published.
    pub async fn publish(&self, id: i64) -> Result<Tournament, ClientError> {
        let dto: TournamentDto = self
            .client
            .put_empty(&format!("/admin/tournaments/{}/publish", id))
            .await?;
        Tournament::try_from(dto)
    }

    /// `PUT /admin/tournaments/{id}/finalize` — Published → Finalized.
    pub async fn finalize(&self, id: i64) -> Result<Tournament, ClientError> {
        let dto: TournamentDto = self
            .client
            .put_empty(&format!("/admin/tournaments/{}/finalize", id))
            .await?;
        Tournament::try_from(dto)
    }

    /// `POST /admin/tournaments/{id}/competitions` — competitions can
    /// only be added while the tournament is a draft.
    pub async fn create_competition(
        &self,
        tournament_id: i64,
        input: &CreateCompetitionInput,
    ) -> Result<Competition, ClientError> {
        input.validate()?;
        let dto: CompetitionDto = self
            .client
            .post(
                &format!("/admin/tournaments/{}/competitions", tournament_id),
                input,
            )
            .await?;
        Ok(dto.into_domain(tournament_id))
    }
}
