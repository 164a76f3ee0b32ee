use poem_openapi::Object;

use business::domain::product::filter::SearchCriteria;
use business::domain::product::read_model::{CategorySummary, FarmerSummary, ProductSearchResult};

/// Search constraints. Every field is optional; an empty object matches
/// every product.
#[derive(Debug, Clone, Default, Object)]
pub struct SearchCriteriaRequest {
    /// Case-insensitive substring of the product name
    pub name: Option<String>,
    pub category_id: Option<i64>,
    pub farmer_id: Option<i64>,
    /// Inclusive lower price bound
    #[oai(validator(minimum(value = "0")))]
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    #[oai(validator(minimum(value = "0")))]
    pub max_price: Option<f64>,
    /// `true`: in stock only, `false`: out of stock only
    pub available: Option<bool>,
    /// Case-insensitive substring of the seasonal availability label
    pub seasonal: Option<String>,
}

impl From<SearchCriteriaRequest> for SearchCriteria {
    fn from(request: SearchCriteriaRequest) -> Self {
        Self {
            name: request.name,
            category_id: request.category_id,
            farmer_id: request.farmer_id,
            min_price: request.min_price,
            max_price: request.max_price,
            available: request.available,
            seasonal: request.seasonal,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategorySummaryResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<CategorySummary> for CategorySummaryResponse {
    fn from(category: CategorySummary) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct FarmerSummaryResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub verified: bool,
}

impl From<FarmerSummary> for FarmerSummaryResponse {
    fn from(farmer: FarmerSummary) -> Self {
        Self {
            id: farmer.id,
            name: farmer.name,
            email: farmer.email,
            phone: farmer.phone,
            location: farmer.location,
            verified: farmer.verified,
        }
    }
}

/// A product with its category and farmer resolved. Either may be `null`
/// when the referenced record no longer exists.
#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub seasonal_availability: Option<String>,
    pub category: Option<CategorySummaryResponse>,
    pub farmer: Option<FarmerSummaryResponse>,
}

impl From<ProductSearchResult> for ProductResponse {
    fn from(result: ProductSearchResult) -> Self {
        Self {
            id: result.id,
            name: result.name,
            description: result.description,
            price: result.price.value(),
            stock: result.stock,
            seasonal_availability: result.seasonal_availability,
            category: result.category.map(Into::into),
            farmer: result.farmer.map(Into::into),
        }
    }
}
