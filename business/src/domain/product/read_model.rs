use crate::domain::category::model::ProductCategory;
use crate::domain::farmer::model::Farmer;

use super::model::Product;
use super::value_objects::Price;

/// Category as embedded in a search result.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<ProductCategory> for CategorySummary {
    fn from(category: ProductCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}

/// Farmer as embedded in a search result.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmerSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub verified: bool,
}

impl From<Farmer> for FarmerSummary {
    fn from(farmer: Farmer) -> Self {
        Self {
            id: farmer.id,
            name: farmer.name,
            email: farmer.email.as_str().to_string(),
            phone: farmer.phone,
            location: farmer.location,
            verified: farmer.verified,
        }
    }
}

/// Response-shaped product. `category` and `farmer` are either complete or
/// absent when the referenced row could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSearchResult {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub stock: i32,
    pub seasonal_availability: Option<String>,
    pub category: Option<CategorySummary>,
    pub farmer: Option<FarmerSummary>,
}

impl ProductSearchResult {
    pub fn assemble(
        product: Product,
        category: Option<CategorySummary>,
        farmer: Option<FarmerSummary>,
    ) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            seasonal_availability: product.seasonal_availability,
            category,
            farmer,
        }
    }
}
