use async_trait::async_trait;

use crate::domain::farmer::errors::FarmerError;

pub struct DeleteFarmerParams {
    pub id: i64,
    /// Authenticated caller; must own the profile.
    pub requested_by: i64,
}

#[async_trait]
pub trait DeleteFarmerUseCase: Send + Sync {
    async fn execute(&self, params: DeleteFarmerParams) -> Result<(), FarmerError>;
}
