use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::filter::SearchCriteria;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::search::SearchProductsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductResponse, SearchCriteriaRequest};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    search_use_case: Arc<dyn SearchProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
}

impl ProductApi {
    pub fn new(
        search_use_case: Arc<dyn SearchProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    ) -> Self {
        Self {
            search_use_case,
            get_by_id_use_case,
        }
    }

    async fn search(&self, criteria: SearchCriteria) -> SearchProductsResponse {
        match self.search_use_case.execute(Some(criteria)).await {
            Ok(results) => {
                SearchProductsResponse::Ok(Json(results.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SearchProductsResponse::BadRequest(json),
                    _ => SearchProductsResponse::InternalError(json),
                }
            }
        }
    }
}

/// Product catalog API
///
/// Public, read-only search over the marketplace catalog.
#[OpenApi]
impl ProductApi {
    /// Search products
    ///
    /// Every parameter is optional and narrows the result; none returns the
    /// whole catalog. Each result embeds its category and farmer.
    #[allow(clippy::too_many_arguments)]
    #[oai(path = "/products/search", method = "get", tag = "ApiTags::Products")]
    async fn search_products(
        &self,
        name: Query<Option<String>>,
        category_id: Query<Option<i64>>,
        farmer_id: Query<Option<i64>>,
        #[oai(validator(minimum(value = "0")))] min_price: Query<Option<f64>>,
        #[oai(validator(minimum(value = "0")))] max_price: Query<Option<f64>>,
        available: Query<Option<bool>>,
        seasonal: Query<Option<String>>,
    ) -> SearchProductsResponse {
        self.search(SearchCriteria {
            name: name.0,
            category_id: category_id.0,
            farmer_id: farmer_id.0,
            min_price: min_price.0,
            max_price: max_price.0,
            available: available.0,
            seasonal: seasonal.0,
        })
        .await
    }

    /// Search products with a JSON body
    ///
    /// Same semantics as the query-string variant.
    #[oai(path = "/products/search", method = "post", tag = "ApiTags::Products")]
    async fn search_products_by_body(
        &self,
        body: Json<SearchCriteriaRequest>,
    ) -> SearchProductsResponse {
        self.search(body.0.into()).await
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i64>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
