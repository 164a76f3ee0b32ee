use poem_openapi::Object;

use business::domain::farmer::model::{Farmer, FarmerChanges};

#[derive(Debug, Clone, Object)]
pub struct CreateFarmerRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Partial update. Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Object)]
pub struct UpdateFarmerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

impl From<UpdateFarmerRequest> for FarmerChanges {
    fn from(request: UpdateFarmerRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
            location: request.location,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct FarmerResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub verified: bool,
}

impl From<Farmer> for FarmerResponse {
    fn from(farmer: Farmer) -> Self {
        Self {
            id: farmer.id,
            user_id: farmer.user_id,
            name: farmer.name,
            email: farmer.email.as_str().to_string(),
            phone: farmer.phone,
            location: farmer.location,
            verified: farmer.verified,
        }
    }
}
