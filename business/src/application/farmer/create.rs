use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::farmer::errors::FarmerError;
use crate::domain::farmer::model::{Farmer, NewFarmer, NewFarmerProps};
use crate::domain::farmer::repository::FarmerRepository;
use crate::domain::farmer::use_cases::create::{CreateFarmerParams, CreateFarmerUseCase};
use crate::domain::logger::Logger;

pub struct CreateFarmerUseCaseImpl {
    pub repository: Arc<dyn FarmerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateFarmerUseCase for CreateFarmerUseCaseImpl {
    async fn execute(&self, params: CreateFarmerParams) -> Result<Farmer, FarmerError> {
        self.logger.info(&format!(
            "Creating farmer profile for user {}",
            params.user_id
        ));

        let new_farmer = NewFarmer::new(NewFarmerProps {
            user_id: params.user_id,
            name: params.name,
            email: params.email,
            phone: params.phone,
            location: params.location,
        })?;

        if RepositoryError::into_option(self.repository.get_by_user_id(new_farmer.user_id).await)?
            .is_some()
        {
            return Err(FarmerError::ProfileAlreadyExists);
        }
        if self
            .repository
            .find_by_email(&new_farmer.email)
            .await?
            .is_some()
        {
            return Err(FarmerError::EmailAlreadyRegistered);
        }

        let farmer = match self.repository.create(&new_farmer).await {
            Ok(farmer) => farmer,
            // lost a race against a concurrent insert on user_id or email
            Err(RepositoryError::Duplicated) => {
                let existing = RepositoryError::into_option(
                    self.repository.get_by_user_id(new_farmer.user_id).await,
                )?;
                return Err(if existing.is_some() {
                    FarmerError::ProfileAlreadyExists
                } else {
                    FarmerError::EmailAlreadyRegistered
                });
            }
            Err(RepositoryError::ReferenceViolation) => {
                self.logger.warn(&format!(
                    "User {} no longer exists, cannot create farmer profile",
                    new_farmer.user_id
                ));
                return Err(FarmerError::OwnerNotFound);
            }
            Err(other) => return Err(FarmerError::Repository(other)),
        };

        self.logger.info(&format!("Farmer created: {}", farmer.id));
        Ok(farmer)
    }
}
