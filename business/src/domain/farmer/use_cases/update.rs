use async_trait::async_trait;

use crate::domain::farmer::errors::FarmerError;
use crate::domain::farmer::model::{Farmer, FarmerChanges};

pub struct UpdateFarmerParams {
    pub id: i64,
    /// Authenticated caller; must own the profile.
    pub requested_by: i64,
    pub changes: FarmerChanges,
}

#[async_trait]
pub trait UpdateFarmerUseCase: Send + Sync {
    async fn execute(&self, params: UpdateFarmerParams) -> Result<Farmer, FarmerError>;
}
