use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::farmer::errors::FarmerError;
use crate::domain::farmer::model::Farmer;
use crate::domain::farmer::repository::FarmerRepository;
use crate::domain::farmer::use_cases::update::{UpdateFarmerParams, UpdateFarmerUseCase};
use crate::domain::logger::Logger;

pub struct UpdateFarmerUseCaseImpl {
    pub repository: Arc<dyn FarmerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateFarmerUseCase for UpdateFarmerUseCaseImpl {
    async fn execute(&self, params: UpdateFarmerParams) -> Result<Farmer, FarmerError> {
        self.logger.info(&format!("Updating farmer: {}", params.id));

        let mut farmer = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FarmerError::NotFound,
                other => FarmerError::Repository(other),
            })?;

        if !farmer.is_owned_by(params.requested_by) {
            self.logger.warn(&format!(
                "User {} tried to update farmer {} owned by user {}",
                params.requested_by, farmer.id, farmer.user_id
            ));
            return Err(FarmerError::Forbidden);
        }

        let previous_email = farmer.email.clone();
        farmer.apply(params.changes)?;

        if farmer.email != previous_email
            && let Some(other) = self.repository.find_by_email(&farmer.email).await?
            && other.id != farmer.id
        {
            return Err(FarmerError::EmailAlreadyRegistered);
        }

        self.repository
            .update(&farmer)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => FarmerError::EmailAlreadyRegistered,
                RepositoryError::NotFound => FarmerError::NotFound,
                other => FarmerError::Repository(other),
            })?;

        self.logger.info(&format!("Farmer updated: {}", farmer.id));
        Ok(farmer)
    }
}
