use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            UserError::InvalidEmail => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.invalid_email",
            ),
            UserError::PasswordTooShort => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.password_too_short",
            ),
            UserError::EmailAlreadyRegistered => (
                StatusCode::CONFLICT,
                "Conflict",
                "user.email_already_registered",
            ),
            UserError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "user.invalid_credentials",
            ),
            UserError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "user.unauthenticated",
            ),
            UserError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "user.not_found"),
            UserError::PasswordHashing | UserError::TokenIssuance => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "user.internal_error",
            ),
            UserError::Repository(_) => (
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
    fn should_map_duplicate_email_to_conflict() {
        let (status, body) = UserError::EmailAlreadyRegistered.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.0.name, "Conflict");
    }

    #[test]
    fn should_not_reveal_which_credential_was_wrong() {
        let (status, body) = UserError::InvalidCredentials.into_error_response();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.0.message, "user.invalid_credentials");
    }
}
