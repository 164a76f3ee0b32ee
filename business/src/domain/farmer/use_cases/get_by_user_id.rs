use async_trait::async_trait;

use crate::domain::farmer::errors::FarmerError;
use crate::domain::farmer::model::Farmer;

pub struct GetFarmerByUserIdParams {
    pub user_id: i64,
}

#[async_trait]
pub trait GetFarmerByUserIdUseCase: Send + Sync {
    async fn execute(&self, params: GetFarmerByUserIdParams) -> Result<Farmer, FarmerError>;
}
