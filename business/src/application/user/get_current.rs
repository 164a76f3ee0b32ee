use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_current::{GetCurrentUserParams, GetCurrentUserUseCase};

/// Resolves validated token claims to the stored account.
pub struct GetCurrentUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCurrentUserUseCase for GetCurrentUserUseCaseImpl {
    async fn execute(&self, params: GetCurrentUserParams) -> Result<User, UserError> {
        let claims = params.claims;

        let Some(user) =
            RepositoryError::into_option(self.repository.get_by_id(claims.subject_id).await)?
        else {
            self.logger.warn(&format!(
                "Token subject {} no longer exists",
                claims.subject_id
            ));
            return Err(UserError::Unauthenticated);
        };

        if let Some(email) = &claims.email
            && !email.eq_ignore_ascii_case(user.email.as_str())
        {
            self.logger.warn(&format!(
                "Token email does not match user {}",
                claims.subject_id
            ));
            return Err(UserError::Unauthenticated);
        }

        Ok(user)
    }
}
