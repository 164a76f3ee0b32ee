use super::{
    auth_config, cors_config, database_config::DatabaseSettings, server_config::ServerConfig,
};
use poem::middleware::Cors;
use security::token_config::TokenConfig;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub auth: TokenConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            auth: auth_config::from_env()?,
        })
    }
}
