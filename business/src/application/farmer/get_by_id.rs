use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::farmer::errors::FarmerError;
use crate::domain::farmer::model::Farmer;
use crate::domain::farmer::repository::FarmerRepository;
use crate::domain::farmer::use_cases::get_by_id::{GetFarmerByIdParams, GetFarmerByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetFarmerByIdUseCaseImpl {
    pub repository: Arc<dyn FarmerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFarmerByIdUseCase for GetFarmerByIdUseCaseImpl {
    async fn execute(&self, params: GetFarmerByIdParams) -> Result<Farmer, FarmerError> {
        self.logger
            .debug(&format!("Getting farmer by id: {}", params.id));
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FarmerError::NotFound,
                other => FarmerError::Repository(other),
            })
    }
}
