use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::value_objects::UserType;

pub struct RegisterUserParams {
    pub email: String,
    pub password: String,
    /// Defaults to `Consumer`.
    pub user_type: Option<UserType>,
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, params: RegisterUserParams) -> Result<User, UserError>;
}
