use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::category::use_cases::get_all::{
    GetAllCategoriesParams, GetAllCategoriesUseCase,
};

use crate::api::category::dto::CategoryResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
}

impl CategoryApi {
    pub fn new(get_all_use_case: Arc<dyn GetAllCategoriesUseCase>) -> Self {
        Self { get_all_use_case }
    }
}

#[OpenApi]
impl CategoryApi {
    /// List product categories
    ///
    /// Ordered by id. `limit` defaults to 100, `offset` to 0.
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn get_all_categories(
        &self,
        limit: Query<Option<i64>>,
        offset: Query<Option<i64>>,
    ) -> GetAllCategoriesResponse {
        let defaults = GetAllCategoriesParams::default();
        let params = GetAllCategoriesParams {
            limit: limit.0.unwrap_or(defaults.limit),
            offset: offset.0.unwrap_or(defaults.offset),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(categories) => GetAllCategoriesResponse::Ok(Json(
                categories.into_iter().map(Into::into).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAllCategoriesResponse::BadRequest(json),
                    _ => GetAllCategoriesResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
