use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::farmer::errors::FarmerError;
use crate::domain::farmer::model::Farmer;
use crate::domain::farmer::repository::FarmerRepository;
use crate::domain::farmer::use_cases::get_all::{GetAllFarmersParams, GetAllFarmersUseCase};
use crate::domain::logger::Logger;

const MAX_PAGE_SIZE: i64 = 1000;

pub struct GetAllFarmersUseCaseImpl {
    pub repository: Arc<dyn FarmerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllFarmersUseCase for GetAllFarmersUseCaseImpl {
    async fn execute(&self, params: GetAllFarmersParams) -> Result<Vec<Farmer>, FarmerError> {
        if params.skip < 0 || !(1..=MAX_PAGE_SIZE).contains(&params.limit) {
            return Err(FarmerError::InvalidPagination);
        }

        self.logger.debug(&format!(
            "Getting farmers (skip {}, limit {})",
            params.skip, params.limit
        ));
        let farmers = self.repository.get_all(params.skip, params.limit).await?;
        Ok(farmers)
    }
}
