use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::farmer::errors::FarmerError;
use crate::domain::farmer::repository::FarmerRepository;
use crate::domain::farmer::use_cases::delete::{DeleteFarmerParams, DeleteFarmerUseCase};
use crate::domain::logger::Logger;

pub struct DeleteFarmerUseCaseImpl {
    pub repository: Arc<dyn FarmerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteFarmerUseCase for DeleteFarmerUseCaseImpl {
    async fn execute(&self, params: DeleteFarmerParams) -> Result<(), FarmerError> {
        self.logger.info(&format!("Deleting farmer: {}", params.id));

        let farmer = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FarmerError::NotFound,
                other => FarmerError::Repository(other),
            })?;

        if !farmer.is_owned_by(params.requested_by) {
            self.logger.warn(&format!(
                "User {} tried to delete farmer {} owned by user {}",
                params.requested_by, farmer.id, farmer.user_id
            ));
            return Err(FarmerError::Forbidden);
        }

        self.repository
            .delete(farmer.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FarmerError::NotFound,
                RepositoryError::ReferenceViolation => {
                    self.logger.warn(&format!(
                        "Farmer {} still has products and cannot be deleted",
                        farmer.id
                    ));
                    FarmerError::HasProducts
                }
                other => FarmerError::Repository(other),
            })?;

        self.logger.info(&format!("Farmer deleted: {}", farmer.id));
        Ok(())
    }
}
