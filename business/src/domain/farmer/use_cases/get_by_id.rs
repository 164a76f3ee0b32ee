use async_trait::async_trait;

use crate::domain::farmer::errors::FarmerError;
use crate::domain::farmer::model::Farmer;

pub struct GetFarmerByIdParams {
    pub id: i64,
}

#[async_trait]
pub trait GetFarmerByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetFarmerByIdParams) -> Result<Farmer, FarmerError>;
}
