use sqlx::FromRow;

use business::domain::category::model::ProductCategory;

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl CategoryEntity {
    pub fn into_domain(self) -> ProductCategory {
        ProductCategory::from_repository(self.id, self.name, self.description)
    }
}
