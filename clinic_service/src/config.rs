use std::{fmt::Display, str::FromStr};

use anyhow::Context;

/// The current environment the application is running in, read from the
/// `ENVIRONMENT` variable and falling back to production when unset or
/// unrecognized.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Develop,
    Local,
}

impl Environment {
    pub fn new_from_env() -> Option<Self> {
        std::env::var("ENVIRONMENT")
            .ok()
            .and_then(|value| Self::from_str(&value).ok())
    }

    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(environment: &str) -> Result<Self, UnknownEnvironment> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownEnvironment(s.to_string())),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Could not convert {0} into an environment value")]
pub struct UnknownEnvironment(String);

pub struct Config {
    /// port number of service
    pub port: usize,
    /// The environment we are in
    pub environment: Environment,
    /// The connection URL for the Postgres database this application should use.
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port: usize = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("PORT must be a number")?;

        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be provided")?;

        let environment = Environment::new_or_prod();

        Ok(Config {
            port,
            environment,
            database_url,
        })
    }

    pub fn new_testing() -> Self {
        Config {
            port: 0,
            environment: Environment::Local,
            database_url: "".to_string(),
        }
    }
}
