use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};

use business::domain::auth::model::AccessToken;
use business::domain::user::model::User;
use business::domain::user::value_objects::UserType;

#[derive(Debug, Clone, Copy, PartialEq, Enum)]
pub enum UserTypeDto {
    #[oai(rename = "FARMER")]
    Farmer,
    #[oai(rename = "CONSUMER")]
    Consumer,
}

impl From<UserType> for UserTypeDto {
    fn from(user_type: UserType) -> Self {
        match user_type {
            UserType::Farmer => UserTypeDto::Farmer,
            UserType::Consumer => UserTypeDto::Consumer,
        }
    }
}

impl From<UserTypeDto> for UserType {
    fn from(dto: UserTypeDto) -> Self {
        match dto {
            UserTypeDto::Farmer => UserType::Farmer,
            UserTypeDto::Consumer => UserType::Consumer,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RegisterUserRequest {
    pub email: String,
    /// At least 8 characters
    pub password: String,
    /// Defaults to `CONSUMER`
    pub user_type: Option<UserTypeDto>,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `bearer`
    pub token_type: String,
}

impl From<AccessToken> for TokenResponse {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
        }
    }
}

/// Public view of an account. The password hash is never exposed.
#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub user_type: UserTypeDto,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email.as_str().to_string(),
            user_type: user.user_type.into(),
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
