use async_trait::async_trait;

use crate::domain::auth::model::AccessClaims;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct GetCurrentUserParams {
    pub claims: AccessClaims,
}

#[async_trait]
pub trait GetCurrentUserUseCase: Send + Sync {
    async fn execute(&self, params: GetCurrentUserParams) -> Result<User, UserError>;
}
