use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Load database settings from environment variables
    ///
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
    /// - DATABASE_MIGRATIONS_PATH: Migrations directory
    ///   (default: "infrastructure/persistence/migrations")
    pub fn from_env() -> anyhow::Result<Self> {
        Self::parse(
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            env::var("DATABASE_MIGRATIONS_PATH").ok(),
        )
    }

    fn parse(
        url: Option<String>,
        max_connections: Option<String>,
        migrations_path: Option<String>,
    ) -> anyhow::Result<Self> {
        let url = url
            .filter(|url| !url.is_empty())
            .context("DATABASE_URL must be set")?;
        let max_connections = match max_connections {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            url,
            max_connections,
            migrations_path: migrations_path
                .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
        })
    }
}

/// Creates the connection pool and brings the schema up to date.
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&DatabaseConfig::new(
        settings.url.clone(),
        settings.max_connections,
    ))
    .await
    .context("failed to connect to the database")?;

    run_migrations(&pool, &settings.migrations_path)
        .await
        .context("failed to run database migrations")?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_require_database_url() {
        assert!(DatabaseSettings::parse(None, None, None).is_err());
        assert!(DatabaseSettings::parse(Some(String::new()), None, None).is_err());
    }

    #[test]
    fn should_apply_defaults() {
        let settings =
            DatabaseSettings::parse(Some("postgres://localhost/market".into()), None, None)
                .unwrap();

        assert_eq!(settings.max_connections, 5);
        assert_eq!(settings.migrations_path, DEFAULT_MIGRATIONS_PATH);
    }

    #[test]
    fn should_reject_non_numeric_pool_size() {
        let result = DatabaseSettings::parse(
            Some("postgres://localhost/market".into()),
            Some("many".into()),
            None,
        );

        assert!(result.is_err());
    }
}
