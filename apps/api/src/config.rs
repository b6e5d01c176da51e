use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub db_max_connections: u32,
    /// Prefix for public landing-page URLs, without a trailing slash.
    pub public_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10)?,
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    pub fn public_page_url(&self, slug: &str) -> String {
        format!("{}/p/{slug}", self.public_base_url)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(base: &str) -> Config {
        Config {
            database_url: "postgres://localhost/signalpage".to_string(),
            anthropic_api_key: "test-key".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            db_max_connections: 10,
            public_base_url: base.to_string(),
        }
    }

    #[test]
    fn test_public_page_url() {
        let config = make_config("https://signalpage.app");
        assert_eq!(
            config.public_page_url("jane-doe-3f9a1c"),
            "https://signalpage.app/p/jane-doe-3f9a1c"
        );
    }

    #[test]
    fn test_parse_env_default_when_unset() {
        let port: u16 = parse_env("SIGNALPAGE_TEST_UNSET_PORT", 9000).unwrap();
        assert_eq!(port, 9000);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("SIGNALPAGE_TEST_BAD_PORT", "eighty");
        let result: Result<u16> = parse_env("SIGNALPAGE_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
        std::env::remove_var("SIGNALPAGE_TEST_BAD_PORT");
    }
}
