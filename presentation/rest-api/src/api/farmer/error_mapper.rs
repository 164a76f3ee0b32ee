use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::farmer::errors::FarmerError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for FarmerError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            FarmerError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "farmer.name_empty",
            ),
            FarmerError::InvalidEmail => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "farmer.invalid_email",
            ),
            FarmerError::LocationTooLong => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "farmer.location_too_long",
            ),
            FarmerError::InvalidPagination => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "farmer.invalid_pagination",
            ),
            FarmerError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "farmer.not_found"),
            FarmerError::ProfileAlreadyExists => (
                StatusCode::CONFLICT,
                "Conflict",
                "farmer.profile_already_exists",
            ),
            FarmerError::EmailAlreadyRegistered => (
                StatusCode::CONFLICT,
                "Conflict",
                "farmer.email_already_registered",
            ),
            FarmerError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden", "farmer.forbidden"),
            FarmerError::HasProducts => (
                StatusCode::CONFLICT,
                "Conflict",
                "farmer.has_products",
            ),
            FarmerError::OwnerNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "farmer.owner_not_found",
            ),
            FarmerError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, ErrorResponse::json(name, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_second_profile_to_conflict() {
        let (status, body) = FarmerError::ProfileAlreadyExists.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.0.message, "farmer.profile_already_exists");
    }

    #[test]
    fn should_map_profile_with_products_to_conflict() {
        let (status, body) = FarmerError::HasProducts.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.0.message, "farmer.has_products");
    }

    #[test]
    fn should_map_missing_owner_to_not_found() {
        let (status, _) = FarmerError::OwnerNotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_foreign_profile_to_forbidden() {
        let (status, _) = FarmerError::Forbidden.into_error_response();

        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
