use std::env;

/// Where tracks and exercises are stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres { database_url: String },
    RemoteApi { base_url: String },
    InMemory { seed_demo_data: bool },
}

impl StoreBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StoreBackend::Postgres { .. } => "postgres",
            StoreBackend::RemoteApi { .. } => "remote-api",
            StoreBackend::InMemory { .. } => "in-memory",
        }
    }
}

/// Limits for the write route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub per_second: u64,
    pub burst: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    /// Base URL of a remote DogRally API to use as the backend
    pub dogrally_api_url: Option<String>,
    /// Seed the in-memory backend with demo exercises and tracks
    pub seed_demo_data: bool,
    pub port: u16,
    pub rate_limit: RateLimit,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            database_url: non_empty("DATABASE_URL"),
            dogrally_api_url: non_empty("DOGRALLY_API_URL"),
            seed_demo_data: non_empty("SEED_DEMO_DATA")
                .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "no"))
                .unwrap_or(true),
            port: non_empty("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            rate_limit: RateLimit {
                per_second: non_empty("RATE_LIMIT_PER_SECOND")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(2),
                burst: non_empty("RATE_LIMIT_BURST")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            },
        }
    }

    /// PostgreSQL wins over the remote API; with neither, tracks live in memory
    pub fn backend(&self) -> StoreBackend {
        if let Some(database_url) = &self.database_url {
            StoreBackend::Postgres {
                database_url: database_url.clone(),
            }
        } else if let Some(base_url) = &self.dogrally_api_url {
            StoreBackend::RemoteApi {
                base_url: base_url.clone(),
            }
        } else {
            StoreBackend::InMemory {
                seed_demo_data: self.seed_demo_data,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]);
        assert_eq!(config.port, 8080);
        assert!(config.seed_demo_data);
        assert_eq!(
            config.rate_limit,
            RateLimit {
                per_second: 2,
                burst: 5
            }
        );
        assert_eq!(
            config.backend(),
            StoreBackend::InMemory {
                seed_demo_data: true
            }
        );
    }

    #[test]
    fn database_url_selects_postgres() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/dogrally"),
            ("DOGRALLY_API_URL", "http://localhost:5000"),
        ]);
        assert_eq!(config.backend().name(), "postgres");
    }

    #[test]
    fn api_url_selects_remote_api() {
        let config = config(&[("DATABASE_URL", " "), ("DOGRALLY_API_URL", "http://localhost:5000")]);
        assert_eq!(
            config.backend(),
            StoreBackend::RemoteApi {
                base_url: "http://localhost:5000".to_string()
            }
        );
    }

    #[test]
    fn seeding_can_be_disabled() {
        assert!(!config(&[("SEED_DEMO_DATA", "false")]).seed_demo_data);
        assert!(!config(&[("SEED_DEMO_DATA", "0")]).seed_demo_data);
        assert!(config(&[("SEED_DEMO_DATA", "yes")]).seed_demo_data);
    }

    #[test]
    fn unparsable_numbers_fall_back() {
        let config = config(&[("PORT", "eighty"), ("RATE_LIMIT_BURST", "-1")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rate_limit.burst, 5);
    }
}
