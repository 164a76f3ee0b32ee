pub mod argon2_password_hasher;
pub mod jwt_token_service;
pub mod token_config;
