use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub environment: String,

    pub email_host: Option<String>,
    pub email_port: Option<u16>,
    pub email_username: Option<String>,
    pub email_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string()))?,
                Err(_) => DEFAULT_PORT,
            },
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            email_host: std::env::var("EMAIL_HOST").ok(),
            email_port: match std::env::var("EMAIL_PORT") {
                Ok(value) => Some(
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidEnvVar("EMAIL_PORT".to_string()))?,
                ),
                Err(_) => None,
            },
            email_username: std::env::var("EMAIL_USERNAME").ok(),
            email_password: std::env::var("EMAIL_PASSWORD").ok(),
        })
    }
}
