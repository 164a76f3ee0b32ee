use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;

pub const PRODUCT_COLUMNS: &str =
    "id, name, description, price, stock, seasonal_availability, category_id, farmer_id";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
    pub seasonal_availability: Option<String>,
    pub category_id: i64,
    pub farmer_id: i64,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let id = self.id;
        let price = self.price.to_f64().ok_or_else(|| {
            tracing::error!("Product {id} has a price that does not fit in f64");
            RepositoryError::DatabaseError
        })?;

        Product::from_repository(
            self.id,
            self.name,
            self.description,
            price,
            self.stock,
            self.seasonal_availability,
            self.category_id,
            self.farmer_id,
        )
        .map_err(|e| {
            tracing::error!("Product {id} violates a domain invariant: {e}");
            RepositoryError::DatabaseError
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn entity(price: &str, stock: i32) -> ProductEntity {
        ProductEntity {
            id: 1,
            name: "Carrot".to_string(),
            description: None,
            price: BigDecimal::from_str(price).unwrap(),
            stock,
            seasonal_availability: Some("Autumn".to_string()),
            category_id: 2,
            farmer_id: 3,
        }
    }

    #[test]
    fn should_convert_numeric_price() {
        let product = entity("4.99", 3).into_domain().unwrap();

        assert!((product.price.value() - 4.99).abs() < 1e-9);
        assert_eq!(product.category_id, 2);
    }

    #[test]
    fn should_reject_corrupted_stock() {
        assert_eq!(
            entity("1.00", -2).into_domain(),
            Err(RepositoryError::DatabaseError)
        );
    }
}
