use async_trait::async_trait;

use crate::domain::farmer::errors::FarmerError;
use crate::domain::farmer::model::Farmer;

pub struct CreateFarmerParams {
    /// Authenticated caller; becomes the profile owner.
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[async_trait]
pub trait CreateFarmerUseCase: Send + Sync {
    async fn execute(&self, params: CreateFarmerParams) -> Result<Farmer, FarmerError>;
}
