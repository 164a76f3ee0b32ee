use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::farmer::errors::FarmerError;
use crate::domain::farmer::model::Farmer;
use crate::domain::farmer::repository::FarmerRepository;
use crate::domain::farmer::use_cases::get_by_user_id::{
    GetFarmerByUserIdParams, GetFarmerByUserIdUseCase,
};
use crate::domain::logger::Logger;

pub struct GetFarmerByUserIdUseCaseImpl {
    pub repository: Arc<dyn FarmerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFarmerByUserIdUseCase for GetFarmerByUserIdUseCaseImpl {
    async fn execute(&self, params: GetFarmerByUserIdParams) -> Result<Farmer, FarmerError> {
        self.logger
            .debug(&format!("Getting farmer for user: {}", params.user_id));
        self.repository
            .get_by_user_id(params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FarmerError::NotFound,
                other => FarmerError::Repository(other),
            })
    }
}
