//! Configuration loading from environment.

use std::env;

/// Application configuration.
///
/// Constructed once at startup and handed to the components that need it;
/// nothing reads the environment after this point.
pub struct Config {
    pub port: u16,
    pub sandbox_mode: bool,
    pub pi_api_key: Option<String>,
    pub allowed_origin: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "10000".to_string())
            .parse()?;

        let sandbox_mode = env::var("SANDBOX_MODE")
            .map(|v| v == "true")
            .unwrap_or(false);

        // Absent key means outbound calls go out unauthenticated and the
        // platform rejects them; main logs a warning rather than failing.
        let pi_api_key = env::var("PI_API_KEY").ok();

        let allowed_origin = env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "*".to_string());

        Ok(Self {
            port,
            sandbox_mode,
            pi_api_key,
            allowed_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate process state; keep them in one test so they
    // cannot race each other.
    #[test]
    fn from_env_applies_defaults_and_overrides() {
        unsafe {
            env::remove_var("PORT");
            env::remove_var("SANDBOX_MODE");
            env::remove_var("PI_API_KEY");
            env::remove_var("ALLOWED_ORIGIN");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 10000);
        assert!(!config.sandbox_mode);
        assert!(config.pi_api_key.is_none());
        assert_eq!(config.allowed_origin, "*");

        unsafe {
            env::set_var("PORT", "8080");
            env::set_var("SANDBOX_MODE", "true");
            env::set_var("PI_API_KEY", "k-123");
            env::set_var("ALLOWED_ORIGIN", "https://app.example.com");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.sandbox_mode);
        assert_eq!(config.pi_api_key.as_deref(), Some("k-123"));
        assert_eq!(config.allowed_origin, "https://app.example.com");

        unsafe {
            env::set_var("PORT", "not-a-port");
        }
        assert!(Config::from_env().is_err());

        unsafe {
            env::remove_var("PORT");
            env::remove_var("SANDBOX_MODE");
            env::remove_var("PI_API_KEY");
            env::remove_var("ALLOWED_ORIGIN");
        }
    }
}
