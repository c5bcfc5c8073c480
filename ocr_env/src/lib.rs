#![deny(missing_docs)]
//! Typed access to the environment (`prod`, `dev`, `local`) the process is deployed into.

use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// The name of the variable the environment is read from
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// The current environment the application is running in
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// Running on a developer machine
    Local,
}

/// An error which can occur when constructing an [Environment]
#[derive(Debug, Error)]
pub enum EnvironmentErr {
    /// The variable could not be read
    #[error("unable to read ENVIRONMENT: {0}")]
    Var(#[from] std::env::VarError),
    /// The value was not recognized as a valid environment
    #[error(transparent)]
    InvalidValue(#[from] UnknownValue),
}

/// Represents a value which cannot be converted into an [Environment]
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Could not convert {0} into an environment value")]
pub struct UnknownValue(String);

impl Environment {
    /// Attempt to read the [Environment] from the process environment variables
    #[tracing::instrument(err, level = tracing::Level::TRACE)]
    pub fn new_from_env() -> Result<Self, EnvironmentErr> {
        let value = std::env::var(ENVIRONMENT_VAR)?;
        Ok(Self::from_str(&value)?)
    }

    /// Read the [Environment], falling back to production when unset or unknown
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
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

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(environment: &str) -> Result<Self, UnknownValue> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownValue(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_values() {
        assert_eq!("prod".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Develop));
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
    }

    #[test]
    fn rejects_unknown_value() {
        let err = "staging".parse::<Environment>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not convert staging into an environment value"
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for env in [
            Environment::Production,
            Environment::Develop,
            Environment::Local,
        ] {
            assert_eq!(env.to_string().parse::<Environment>(), Ok(env));
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Environment::Local).unwrap();
        assert_eq!(json, "\"local\"");
    }
}
