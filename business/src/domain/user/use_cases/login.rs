use async_trait::async_trait;

use crate::domain::auth::model::AccessToken;
use crate::domain::user::errors::UserError;

pub struct LoginParams {
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<AccessToken, UserError>;
}
