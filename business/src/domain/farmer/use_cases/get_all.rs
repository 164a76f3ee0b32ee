use async_trait::async_trait;

use crate::domain::farmer::errors::FarmerError;
use crate::domain::farmer::model::Farmer;

pub struct GetAllFarmersParams {
    pub skip: i64,
    pub limit: i64,
}

impl Default for GetAllFarmersParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
        }
    }
}

#[async_trait]
pub trait GetAllFarmersUseCase: Send + Sync {
    async fn execute(&self, params: GetAllFarmersParams) -> Result<Vec<Farmer>, FarmerError>;
}
