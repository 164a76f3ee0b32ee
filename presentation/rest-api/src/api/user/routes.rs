use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::user::use_cases::get_by_id::{GetUserByIdParams, GetUserByIdUseCase};
use business::domain::user::use_cases::get_current::{
    GetCurrentUserParams, GetCurrentUserUseCase,
};
use business::domain::user::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;
use crate::api::user::dto::{LoginRequest, RegisterUserRequest, TokenResponse, UserResponse};

pub struct UserApi {
    register_use_case: Arc<dyn RegisterUserUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
    get_current_use_case: Arc<dyn GetCurrentUserUseCase>,
    get_by_id_use_case: Arc<dyn GetUserByIdUseCase>,
}

impl UserApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUserUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
        get_current_use_case: Arc<dyn GetCurrentUserUseCase>,
        get_by_id_use_case: Arc<dyn GetUserByIdUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
            get_current_use_case,
            get_by_id_use_case,
        }
    }
}

/// User accounts and authentication
#[OpenApi(prefix_path = "/api/users")]
impl UserApi {
    /// Register a new account
    #[oai(path = "/register", method = "post", tag = "ApiTags::Users")]
    async fn register(&self, body: Json<RegisterUserRequest>) -> RegisterUserResponse {
        let params = RegisterUserParams {
            email: body.0.email,
            password: body.0.password,
            user_type: body.0.user_type.map(Into::into),
        };

        match self.register_use_case.execute(params).await {
            Ok(user) => RegisterUserResponse::Created(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterUserResponse::BadRequest(json),
                    409 => RegisterUserResponse::Conflict(json),
                    _ => RegisterUserResponse::InternalError(json),
                }
            }
        }
    }

    /// Log in
    ///
    /// Exchanges credentials for a bearer access token.
    #[oai(path = "/login", method = "post", tag = "ApiTags::Users")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        let params = LoginParams {
            email: body.0.email,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(token) => LoginResponse::Ok(Json(token.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginResponse::Unauthorized(json),
                    _ => LoginResponse::InternalError(json),
                }
            }
        }
    }

    /// Current user
    ///
    /// Returns the account the bearer token was issued for.
    #[oai(path = "/me", method = "get", tag = "ApiTags::Users")]
    async fn me(&self, auth: JwtBearer) -> GetUserResponse {
        match self
            .get_current_use_case
            .execute(GetCurrentUserParams { claims: auth.0 })
            .await
        {
            Ok(user) => GetUserResponse::Ok(Json(user.into())),
            Err(err) => user_error(err),
        }
    }

    /// Get a user by ID
    #[oai(path = "/:id", method = "get", tag = "ApiTags::Users")]
    async fn get_user_by_id(&self, id: Path<i64>) -> GetUserResponse {
        match self
            .get_by_id_use_case
            .execute(GetUserByIdParams { id: id.0 })
            .await
        {
            Ok(user) => GetUserResponse::Ok(Json(user.into())),
            Err(err) => user_error(err),
        }
    }
}

fn user_error(err: impl IntoErrorResponse) -> GetUserResponse {
    let (status, json) = err.into_error_response();
    match status.as_u16() {
        401 => GetUserResponse::Unauthorized(json),
        404 => GetUserResponse::NotFound(json),
        _ => GetUserResponse::InternalError(json),
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterUserResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<TokenResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::{Endpoint, EndpointExt};
    use poem_openapi::OpenApiService;

    use business::domain::auth::model::AccessToken;
    use business::domain::auth::services::TokenService;
    use business::domain::user::errors::UserError;
    use business::domain::user::model::User;
    use business::domain::user::value_objects::UserType;
    use security::jwt_token_service::JwtTokenService;
    use security::token_config::TokenConfig;

    use super::*;

    fn stored_user(id: i64) -> User {
        let now = Utc::now();
        User::from_repository(
            id,
            "user@example.com".to_string(),
            "$argon2id$hash".to_string(),
            UserType::Consumer,
            true,
            now,
            now,
        )
    }

    struct Accounts;

    #[async_trait]
    impl RegisterUserUseCase for Accounts {
        async fn execute(&self, params: RegisterUserParams) -> Result<User, UserError> {
            if params.email == "taken@example.com" {
                return Err(UserError::EmailAlreadyRegistered);
            }
            Ok(stored_user(1))
        }
    }

    #[async_trait]
    impl LoginUseCase for Accounts {
        async fn execute(&self, _params: LoginParams) -> Result<AccessToken, UserError> {
            Err(UserError::InvalidCredentials)
        }
    }

    #[async_trait]
    impl GetCurrentUserUseCase for Accounts {
        async fn execute(&self, params: GetCurrentUserParams) -> Result<User, UserError> {
            Ok(stored_user(params.claims.subject_id))
        }
    }

    #[async_trait]
    impl GetUserByIdUseCase for Accounts {
        async fn execute(&self, _params: GetUserByIdParams) -> Result<User, UserError> {
            Err(UserError::NotFound)
        }
    }

    fn tokens() -> Arc<dyn TokenService> {
        let config = TokenConfig::new("test-secret".to_string(), "HS256", 30).unwrap();
        Arc::new(JwtTokenService::new(&config))
    }

    fn client(tokens: Arc<dyn TokenService>) -> TestClient<impl Endpoint> {
        let accounts = Arc::new(Accounts);
        let api = UserApi::new(
            accounts.clone(),
            accounts.clone(),
            accounts.clone(),
            accounts,
        );
        TestClient::new(OpenApiService::new(api, "test", "1.0").data(tokens))
    }

    #[tokio::test]
    async fn should_register_with_created_status() {
        let resp = client(tokens())
            .post("/api/users/register")
            .body_json(&serde_json::json!({
                "email": "user@example.com",
                "password": "long enough"
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        let json = resp.json().await;
        let user = json.value().object();
        user.get("is_active").assert_bool(true);
        user.get("user_type").assert_string("CONSUMER");
    }

    #[tokio::test]
    async fn should_return_conflict_for_taken_email() {
        let resp = client(tokens())
            .post("/api/users/register")
            .body_json(&serde_json::json!({
                "email": "taken@example.com",
                "password": "long enough"
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_return_unauthorized_for_bad_login() {
        let resp = client(tokens())
            .post("/api/users/login")
            .body_json(&serde_json::json!({
                "email": "user@example.com",
                "password": "wrong password"
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_require_bearer_token_for_me() {
        let resp = client(tokens()).get("/api/users/me").send().await;

        resp.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_token_signed_with_another_secret() {
        let foreign = JwtTokenService::new(
            &TokenConfig::new("other-secret".to_string(), "HS256", 30).unwrap(),
        )
        .issue(3, None, None)
        .unwrap();

        let resp = client(tokens())
            .get("/api/users/me")
            .header("Authorization", format!("Bearer {}", foreign.access_token))
            .send()
            .await;

        resp.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_return_current_user_for_valid_token() {
        let tokens = tokens();
        let issued = tokens
            .issue(3, Some("user@example.com".to_string()), None)
            .unwrap();

        let resp = client(tokens)
            .get("/api/users/me")
            .header("Authorization", format!("Bearer {}", issued.access_token))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.json().await.value().object().get("id").assert_i64(3);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_user() {
        let resp = client(tokens()).get("/api/users/42").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }
}
