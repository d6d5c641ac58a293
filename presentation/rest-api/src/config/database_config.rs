use anyhow::Context;
use persistence::db::{DatabaseConfig, DatabaseError, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;
use std::time::Duration;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Database settings read from the environment
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub pool: DatabaseConfig,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Load database settings from environment variables
    ///
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - DATABASE_ACQUIRE_TIMEOUT_SECS: connection acquire timeout (default: 30)
    /// - DATABASE_MIGRATIONS_PATH: migrations directory, skipped when missing
    ///   (default: "infrastructure/persistence/migrations")
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let mut pool = DatabaseConfig::new(url);

        if let Some(value) = lookup("DATABASE_MAX_CONNECTIONS") {
            pool.max_connections = value
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?;
        }
        if let Some(value) = lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            let secs: u64 = value
                .parse()
                .context("DATABASE_ACQUIRE_TIMEOUT_SECS must be a number of seconds")?;
            pool.acquire_timeout = Duration::from_secs(secs);
        }

        let migrations_path =
            lookup("DATABASE_MIGRATIONS_PATH").unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            pool,
            migrations_path,
        })
    }
}

/// Open the connection pool and apply pending migrations
///
/// # Errors
/// Returns error if the connection fails or a migration fails. A missing
/// migrations directory is only logged.
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&settings.pool).await?;

    match run_migrations(&pool, &settings.migrations_path).await {
        Err(DatabaseError::MigrationsNotFound) => {
            tracing::warn!(
                path = %settings.migrations_path,
                "migrations directory not found, skipping"
            );
        }
        other => other?,
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_require_database_url() {
        let result = DatabaseSettings::from_lookup(lookup_from(&[]));

        assert!(result.is_err());
    }

    #[test]
    fn should_use_pool_defaults_when_only_url_is_set() {
        let settings =
            DatabaseSettings::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/catalog")]))
                .unwrap();

        assert_eq!(settings.pool.connection_string, "postgres://db/catalog");
        assert_eq!(settings.pool.max_connections, 5);
        assert_eq!(settings.pool.acquire_timeout, Duration::from_secs(30));
        assert_eq!(settings.migrations_path, DEFAULT_MIGRATIONS_PATH);
    }

    #[test]
    fn should_read_pool_overrides() {
        let settings = DatabaseSettings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/catalog"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("DATABASE_ACQUIRE_TIMEOUT_SECS", "3"),
            ("DATABASE_MIGRATIONS_PATH", "/srv/catalog/migrations"),
        ]))
        .unwrap();

        assert_eq!(settings.pool.max_connections, 12);
        assert_eq!(settings.pool.acquire_timeout, Duration::from_secs(3));
        assert_eq!(settings.migrations_path, "/srv/catalog/migrations");
    }

    #[test]
    fn should_reject_unparsable_pool_size() {
        let result = DatabaseSettings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/catalog"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ]));

        assert!(result.is_err());
    }
}
