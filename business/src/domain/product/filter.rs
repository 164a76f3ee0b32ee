use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use super::model::Product;

/// Optional search constraints. Every field is independent; `None` means
/// "no constraint on this dimension".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub category_id: Option<i64>,
    pub farmer_id: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub available: Option<bool>,
    pub seasonal: Option<String>,
}

impl SearchCriteria {
    /// Rejects numeric bounds that no product could satisfy or that are not
    /// real numbers. Runs before any predicate is built.
    pub fn validate(&self) -> Result<(), ProductError> {
        for bound in [self.min_price, self.max_price].into_iter().flatten() {
            if !bound.is_finite() || bound < 0.0 {
                return Err(ProductError::InvalidPrice);
            }
        }
        if let (Some(min), Some(max)) = (self.min_price, self.max_price)
            && min > max
        {
            return Err(ProductError::InvalidPriceRange);
        }
        Ok(())
    }
}

/// A single condition over a product. A search is the conjunction of a list
/// of these.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductPredicate {
    /// Case-insensitive substring of the product name.
    NameContains(String),
    CategoryIs(i64),
    FarmerIs(i64),
    /// `price >= bound`
    PriceAtLeast(f64),
    /// `price <= bound`
    PriceAtMost(f64),
    /// `stock > 0`
    InStock,
    /// `stock == 0`
    OutOfStock,
    /// Case-insensitive substring of the seasonal-availability label.
    SeasonalContains(String),
}

impl ProductPredicate {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductPredicate::NameContains(needle) => contains_ignore_case(&product.name, needle),
            ProductPredicate::CategoryIs(id) => product.category_id == *id,
            ProductPredicate::FarmerIs(id) => product.farmer_id == *id,
            ProductPredicate::PriceAtLeast(min) => product.price.value() >= *min,
            ProductPredicate::PriceAtMost(max) => product.price.value() <= *max,
            ProductPredicate::InStock => product.is_available(),
            ProductPredicate::OutOfStock => !product.is_available(),
            ProductPredicate::SeasonalContains(needle) => product
                .seasonal_availability
                .as_deref()
                .is_some_and(|label| contains_ignore_case(label, needle)),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

type Rule = fn(&SearchCriteria) -> Option<ProductPredicate>;

// Order only affects the generated SQL, never the result set.
const RULES: [Rule; 7] = [
    category_rule,
    farmer_rule,
    availability_rule,
    min_price_rule,
    max_price_rule,
    name_rule,
    seasonal_rule,
];

fn name_rule(criteria: &SearchCriteria) -> Option<ProductPredicate> {
    criteria
        .name
        .as_ref()
        .filter(|name| !name.is_empty())
        .map(|name| ProductPredicate::NameContains(name.clone()))
}

fn category_rule(criteria: &SearchCriteria) -> Option<ProductPredicate> {
    criteria.category_id.map(ProductPredicate::CategoryIs)
}

fn farmer_rule(criteria: &SearchCriteria) -> Option<ProductPredicate> {
    criteria.farmer_id.map(ProductPredicate::FarmerIs)
}

fn min_price_rule(criteria: &SearchCriteria) -> Option<ProductPredicate> {
    criteria.min_price.map(ProductPredicate::PriceAtLeast)
}

fn max_price_rule(criteria: &SearchCriteria) -> Option<ProductPredicate> {
    criteria.max_price.map(ProductPredicate::PriceAtMost)
}

fn availability_rule(criteria: &SearchCriteria) -> Option<ProductPredicate> {
    criteria.available.map(|available| {
        if available {
            ProductPredicate::InStock
        } else {
            ProductPredicate::OutOfStock
        }
    })
}

fn seasonal_rule(criteria: &SearchCriteria) -> Option<ProductPredicate> {
    criteria
        .seasonal
        .as_ref()
        .filter(|seasonal| !seasonal.is_empty())
        .map(|seasonal| ProductPredicate::SeasonalContains(seasonal.clone()))
}

/// Translates criteria into the conjunction of the constraints that are
/// present. `None` or an empty record yields an empty list, which matches
/// every product.
pub fn build_predicates(criteria: Option<&SearchCriteria>) -> Vec<ProductPredicate> {
    criteria
        .map(|criteria| RULES.iter().filter_map(|rule| rule(criteria)).collect())
        .unwrap_or_default()
}

/// Evaluates a conjunction in memory.
pub fn matches_all(predicates: &[ProductPredicate], product: &Product) -> bool {
    predicates.iter().all(|predicate| predicate.matches(product))
}
