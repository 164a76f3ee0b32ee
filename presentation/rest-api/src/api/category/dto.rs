use poem_openapi::Object;

use business::domain::category::model::ProductCategory;

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<ProductCategory> for CategoryResponse {
    fn from(category: ProductCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}
