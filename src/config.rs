use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_JWT_EXPIRE_HOURS: i64 = 168;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:5174,http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_expire_hours: i64,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            database_url: get_env("DATABASE_URL")?,
            database_max_connections: get_env_parse_or(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
            jwt_secret: get_env("JWT_SECRET")?,
            jwt_expire_hours: get_env_parse_or("JWT_EXPIRE_HOURS", DEFAULT_JWT_EXPIRE_HOURS)?,
            cors_allowed_origins: split_origins(&get_env_or(
                "CORS_ALLOWED_ORIGINS",
                DEFAULT_CORS_ORIGINS,
            )),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_empty_entries_dropped() {
        let origins = split_origins(" http://a.test, ,http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn default_origins_cover_local_dev_servers() {
        assert_eq!(split_origins(DEFAULT_CORS_ORIGINS).len(), 3);
    }
}
