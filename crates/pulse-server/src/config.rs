/// Server configuration, read once at startup and passed in explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PULSE_PORT is not set")]
    MissingPort,

    #[error("PULSE_PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `PULSE_PORT` is required; there is no default port. `PULSE_HOST`
    /// defaults to `0.0.0.0`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("PULSE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let raw_port = std::env::var("PULSE_PORT").map_err(|_| ConfigError::MissingPort)?;
        let port = raw_port
            .parse()
            .map_err(|_| ConfigError::InvalidPort(raw_port))?;

        Ok(Self { host, port })
    }

    /// Bind address in `host:port` form.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-global, so all cases run in one test.
    #[test]
    fn from_env_cases() {
        std::env::remove_var("PULSE_HOST");
        std::env::remove_var("PULSE_PORT");
        assert!(matches!(Config::from_env(), Err(ConfigError::MissingPort)));

        std::env::set_var("PULSE_PORT", "not-a-port");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidPort(_))
        ));

        std::env::set_var("PULSE_PORT", "3000");
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.addr(), "0.0.0.0:3000");

        std::env::set_var("PULSE_HOST", "127.0.0.1");
        let config = Config::from_env().unwrap();
        assert_eq!(config.addr(), "127.0.0.1:3000");

        std::env::remove_var("PULSE_HOST");
        std::env::remove_var("PULSE_PORT");
    }
}
