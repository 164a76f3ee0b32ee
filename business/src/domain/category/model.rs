/// A product category. Names are unique across the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCategory {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl ProductCategory {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i64, name: String, description: Option<String>) -> Self {
        Self {
            id,
            name,
            description,
        }
    }
}
