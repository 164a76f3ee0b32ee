use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::farmer::use_cases::create::{CreateFarmerParams, CreateFarmerUseCase};
use business::domain::farmer::use_cases::delete::{DeleteFarmerParams, DeleteFarmerUseCase};
use business::domain::farmer::use_cases::get_all::{GetAllFarmersParams, GetAllFarmersUseCase};
use business::domain::farmer::use_cases::get_by_id::{GetFarmerByIdParams, GetFarmerByIdUseCase};
use business::domain::farmer::use_cases::get_by_user_id::{
    GetFarmerByUserIdParams, GetFarmerByUserIdUseCase,
};
use business::domain::farmer::use_cases::update::{UpdateFarmerParams, UpdateFarmerUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::farmer::dto::{CreateFarmerRequest, FarmerResponse, UpdateFarmerRequest};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct FarmerApi {
    create_use_case: Arc<dyn CreateFarmerUseCase>,
    get_all_use_case: Arc<dyn GetAllFarmersUseCase>,
    get_by_id_use_case: Arc<dyn GetFarmerByIdUseCase>,
    get_by_user_id_use_case: Arc<dyn GetFarmerByUserIdUseCase>,
    update_use_case: Arc<dyn UpdateFarmerUseCase>,
    delete_use_case: Arc<dyn DeleteFarmerUseCase>,
}

impl FarmerApi {
    pub fn new(
        create_use_case: Arc<dyn CreateFarmerUseCase>,
        get_all_use_case: Arc<dyn GetAllFarmersUseCase>,
        get_by_id_use_case: Arc<dyn GetFarmerByIdUseCase>,
        get_by_user_id_use_case: Arc<dyn GetFarmerByUserIdUseCase>,
        update_use_case: Arc<dyn UpdateFarmerUseCase>,
        delete_use_case: Arc<dyn DeleteFarmerUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            get_by_user_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Farmer profiles
///
/// Reads are public. Writes need a bearer token, and updates and deletes
/// are limited to the profile owner.
#[OpenApi]
impl FarmerApi {
    /// Create the caller's farmer profile
    #[oai(path = "/api/v1/farmers", method = "post", tag = "ApiTags::Farmers")]
    async fn create_farmer(
        &self,
        auth: JwtBearer,
        body: Json<CreateFarmerRequest>,
    ) -> CreateFarmerResponse {
        let params = CreateFarmerParams {
            user_id: auth.0.subject_id,
            name: body.0.name,
            email: body.0.email,
            phone: body.0.phone,
            location: body.0.location,
        };

        match self.create_use_case.execute(params).await {
            Ok(farmer) => CreateFarmerResponse::Created(Json(farmer.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateFarmerResponse::BadRequest(json),
                    404 => CreateFarmerResponse::NotFound(json),
                    409 => CreateFarmerResponse::Conflict(json),
                    _ => CreateFarmerResponse::InternalError(json),
                }
            }
        }
    }

    /// List farmers
    ///
    /// `skip` defaults to 0, `limit` to 100.
    #[oai(path = "/api/v1/farmers", method = "get", tag = "ApiTags::Farmers")]
    async fn get_all_farmers(
        &self,
        skip: Query<Option<i64>>,
        limit: Query<Option<i64>>,
    ) -> GetAllFarmersResponse {
        let defaults = GetAllFarmersParams::default();
        let params = GetAllFarmersParams {
            skip: skip.0.unwrap_or(defaults.skip),
            limit: limit.0.unwrap_or(defaults.limit),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(farmers) => {
                GetAllFarmersResponse::Ok(Json(farmers.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAllFarmersResponse::BadRequest(json),
                    _ => GetAllFarmersResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a farmer by ID
    #[oai(path = "/api/v1/farmers/:id", method = "get", tag = "ApiTags::Farmers")]
    async fn get_farmer_by_id(&self, id: Path<i64>) -> GetFarmerResponse {
        match self
            .get_by_id_use_case
            .execute(GetFarmerByIdParams { id: id.0 })
            .await
        {
            Ok(farmer) => GetFarmerResponse::Ok(Json(farmer.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetFarmerResponse::NotFound(json),
                    _ => GetFarmerResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the farmer profile owned by a user
    #[oai(
        path = "/api/v1/farmers/user/:user_id",
        method = "get",
        tag = "ApiTags::Farmers"
    )]
    async fn get_farmer_by_user_id(&self, user_id: Path<i64>) -> GetFarmerResponse {
        match self
            .get_by_user_id_use_case
            .execute(GetFarmerByUserIdParams { user_id: user_id.0 })
            .await
        {
            Ok(farmer) => GetFarmerResponse::Ok(Json(farmer.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetFarmerResponse::NotFound(json),
                    _ => GetFarmerResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a farmer profile
    #[oai(path = "/api/v1/farmers/:id", method = "put", tag = "ApiTags::Farmers")]
    async fn update_farmer(
        &self,
        auth: JwtBearer,
        id: Path<i64>,
        body: Json<UpdateFarmerRequest>,
    ) -> UpdateFarmerResponse {
        let params = UpdateFarmerParams {
            id: id.0,
            requested_by: auth.0.subject_id,
            changes: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(farmer) => UpdateFarmerResponse::Ok(Json(farmer.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateFarmerResponse::BadRequest(json),
                    403 => UpdateFarmerResponse::Forbidden(json),
                    404 => UpdateFarmerResponse::NotFound(json),
                    409 => UpdateFarmerResponse::Conflict(json),
                    _ => UpdateFarmerResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a farmer profile
    ///
    /// Refused with 409 while products are still listed against the profile.
    #[oai(path = "/api/v1/farmers/:id", method = "delete", tag = "ApiTags::Farmers")]
    async fn delete_farmer(&self, auth: JwtBearer, id: Path<i64>) -> DeleteFarmerResponse {
        match self
            .delete_use_case
            .execute(DeleteFarmerParams {
                id: id.0,
                requested_by: auth.0.subject_id,
            })
            .await
        {
            Ok(()) => DeleteFarmerResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteFarmerResponse::Forbidden(json),
                    404 => DeleteFarmerResponse::NotFound(json),
                    409 => DeleteFarmerResponse::Conflict(json),
                    _ => DeleteFarmerResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateFarmerResponse {
    #[oai(status = 201)]
    Created(Json<FarmerResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllFarmersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<FarmerResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetFarmerResponse {
    #[oai(status = 200)]
    Ok(Json<FarmerResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateFarmerResponse {
    #[oai(status = 200)]
    Ok(Json<FarmerResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteFarmerResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
