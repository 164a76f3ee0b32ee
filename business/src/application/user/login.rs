use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::model::AccessToken;
use crate::domain::auth::services::TokenService;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::Email;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::login::{LoginParams, LoginUseCase};

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_service: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<AccessToken, UserError> {
        // Every rejection below is reported as the same error.
        let email = Email::parse(&params.email).map_err(|_| UserError::InvalidCredentials)?;

        let Some(user) = self.repository.find_by_email(&email).await? else {
            self.logger
                .warn(&format!("Login rejected for {}: unknown email", email));
            return Err(UserError::InvalidCredentials);
        };

        let password_matches = self
            .password_hasher
            .verify(&params.password, &user.hashed_password)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Password verification failed: {}", e));
                UserError::PasswordHashing
            })?;
        if !password_matches {
            self.logger
                .warn(&format!("Login rejected for {}: wrong password", email));
            return Err(UserError::InvalidCredentials);
        }
        if !user.is_active {
            self.logger
                .warn(&format!("Login rejected for {}: inactive account", email));
            return Err(UserError::InvalidCredentials);
        }

        let token = self
            .token_service
            .issue(user.id, Some(user.email.as_str().to_string()), None)
            .map_err(|e| {
                self.logger.error(&format!("Token issuance failed: {}", e));
                UserError::TokenIssuance
            })?;

        self.logger.info(&format!("User logged in: {}", user.id));
        Ok(token)
    }
}
