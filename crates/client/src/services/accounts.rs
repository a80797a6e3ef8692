//! Administrator account management (`/admin/accounts`).

use std::sync::Arc;

use domain::Account;

use crate::dto::AccountDto;
use crate::envelope::Paginated;
use crate::error::ClientError;
use crate::http::ApiClient;
use crate::validate::{AdminAccountInput, UpdateAdminAccountInput};

#[derive(Clone)]
pub struct AccountService {
    client: Arc<ApiClient>,
}

impl AccountService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /admin/accounts`.
    pub async fn list(&self) -> Result<Paginated<Account>, ClientError> {
        let page: Paginated<AccountDto> = self.client.get("/admin/accounts").await?;
        page.try_map(|dto| Ok(dto.into()))
    }

    /// `GET /admin/accounts/{id}`.
    pub async fn get(&self, id: i64) -> Result<Account, ClientError> {
        let dto: AccountDto = self.client.get(&format!("/admin/accounts/{}", id)).await?;
        Ok(dto.into())
    }

    /// `POST /admin/accounts`.
    pub async fn create(&self, input: &AdminAccountInput) -> Result<Account, ClientError> {
        input.validate()?;
        let dto: AccountDto = self.client.post("/admin/accounts", input).await?;
        Ok(dto.into())
    }

    /// `PUT /admin/accounts/{id}`.
    pub async fn update(
        &self,
        id: i64,
        input: &UpdateAdminAccountInput,
    ) -> Result<Account, ClientError> {
        input.validate()?;
        let dto: AccountDto = self
            .client
            .put(&format!("/admin/accounts/{}", id), input)
            .await?;
        Ok(dto.into())
    }

    /// `PUT /admin/accounts/{id}/activate` — clears the soft-delete
    /// timestamp.
    pub async fn activate(&self, id: i64) -> Result<Account, ClientError> {
        let dto: AccountDto = self
            .client
            .put_empty(&format!("/admin/accounts/{}/activate", id))
            .await?;
        Ok(dto.into())
    }

    /// `PUT /admin/accounts/{id}/deactivate` — soft delete.
    pub async fn deactivate(&self, id: i64) -> Result<Account, ClientError> {
        let dto: AccountDto = self
            .client
            .put_empty(&format!("/admin/accounts/{}/deactivate", id))
            .await?;
        Ok(dto.into())
    }
}
