use sqlx::FromRow;

use business::domain::farmer::model::Farmer;

pub const FARMER_COLUMNS: &str = "id, user_id, name, email, phone, location, verified";

#[derive(Debug, FromRow)]
pub struct FarmerEntity {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub verified: bool,
}

impl FarmerEntity {
    pub fn into_domain(self) -> Farmer {
        Farmer::from_repository(
            self.id,
            self.user_id,
            self.name,
            self.email,
            self.phone,
            self.location,
            self.verified,
        )
    }
}
