use super::errors::ProductError;
use super::value_objects::Price;

/// A catalog item offered by a farmer.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub stock: i32,
    pub seasonal_availability: Option<String>,
    pub category_id: i64,
    pub farmer_id: i64,
}

impl Product {
    /// Constructor for data already persisted in the repository.
    ///
    /// Rows are guarded by CHECK constraints, but price and stock are still
    /// re-validated so a corrupted row cannot leak a negative value.
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: i64,
        name: String,
        description: Option<String>,
        price: f64,
        stock: i32,
        seasonal_availability: Option<String>,
        category_id: i64,
        farmer_id: i64,
    ) -> Result<Self, ProductError> {
        if stock < 0 {
            return Err(ProductError::InvalidStock);
        }
        Ok(Self {
            id,
            name,
            description,
            price: Price::new(price)?,
            stock,
            seasonal_availability,
            category_id,
            farmer_id,
        })
    }

    pub fn is_available(&self) -> bool {
        self.stock > 0
    }
}
