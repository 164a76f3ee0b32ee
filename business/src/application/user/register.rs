use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::Email;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUser, User, validate_password};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};
use crate::domain::user::value_objects::UserType;

pub struct RegisterUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> Result<User, UserError> {
        let email = Email::parse(&params.email).map_err(|_| UserError::InvalidEmail)?;
        validate_password(&params.password)?;

        self.logger.info(&format!("Registering user: {}", email));

        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(UserError::EmailAlreadyRegistered);
        }

        let hashed_password = self
            .password_hasher
            .hash(&params.password)
            .await
            .map_err(|e| {
                self.logger.error(&format!("Password hashing failed: {}", e));
                UserError::PasswordHashing
            })?;

        let new_user = NewUser::new(
            email,
            hashed_password,
            params.user_type.unwrap_or(UserType::Consumer),
        );
        let user = self
            .repository
            .create(&new_user)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => UserError::EmailAlreadyRegistered,
                other => UserError::Repository(other),
            })?;

        self.logger.info(&format!("User registered: {}", user.id));
        Ok(user)
    }
}
