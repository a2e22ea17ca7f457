pub use crate::utils::database;
use std::{env, fmt};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
}

pub struct Context {
    pub app: AppContext,
    pub db: database::Database,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub seed: bool,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug)]
pub enum Error {
    InvalidPort(String),
    Database(database::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort(raw) => write!(f, "Invalid PORT number: {}", raw),
            Self::Database(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<database::Error> for Error {
    fn from(err: database::Error) -> Self {
        Self::Database(err)
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.to_lowercase().as_str(), "1" | "true" | "yes")
}

fn parse_port(raw: &str) -> Result<u32, Error> {
    raw.parse::<u32>()
        .map_err(|_| Error::InvalidPort(raw.to_string()))
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = parse_port(&env::var("PORT").unwrap_or_else(|_| "8000".to_string()))?;
        let seed = env::var("SEED_DATA")
            .map(|raw| parse_flag(&raw))
            .unwrap_or(true);

        Ok(Self {
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
            },
            database: DatabaseConfig { seed },
        })
    }
}

pub trait ToContext {
    fn to_context(self) -> Result<Context, Error>;
}

impl ToContext for Config {
    fn to_context(self) -> Result<Context, Error> {
        let db = if self.database.seed {
            database::Database::seeded()?
        } else {
            database::Database::new()
        };

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
            },
            db,
        })
    }
}
