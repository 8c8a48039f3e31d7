//! Service configuration from environment variables.

use crate::error::ConfigError;
use std::str::FromStr;

/// Table-management policy applied at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaPolicy {
    /// Create the database and table when missing.
    AutoCreate,
    /// Require the table to already exist and fail fast otherwise.
    ExpectExisting,
}

impl FromStr for SchemaPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" | "auto-create" | "update" => Ok(SchemaPolicy::AutoCreate),
            "expect" | "expect-existing" | "validate" => Ok(SchemaPolicy::ExpectExisting),
            other => Err(ConfigError::Load(format!("unknown SCHEMA_POLICY '{}'", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    /// Schema holding the tutorials table. Must be a valid PostgreSQL identifier.
    pub schema: String,
    pub schema_policy: SchemaPolicy,
}

impl ServiceConfig {
    /// Read configuration from the environment, with defaults suitable for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/tutorials".into());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());
        let max_connections = match std::env::var("MAX_CONNECTIONS") {
            Ok(v) => v
                .parse()
                .map_err(|_| ConfigError::Load(format!("invalid MAX_CONNECTIONS '{}'", v)))?,
            Err(_) => 5,
        };
        let schema = std::env::var("TUTORIALS_SCHEMA").unwrap_or_else(|_| "public".into());
        let schema_policy = match std::env::var("SCHEMA_POLICY") {
            Ok(v) => v.parse()?,
            Err(_) => SchemaPolicy::AutoCreate,
        };
        Ok(ServiceConfig {
            database_url,
            bind_addr,
            max_connections,
            schema,
            schema_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_policy_accepts_both_spellings() {
        assert_eq!("auto".parse::<SchemaPolicy>().unwrap(), SchemaPolicy::AutoCreate);
        assert_eq!(
            "auto-create".parse::<SchemaPolicy>().unwrap(),
            SchemaPolicy::AutoCreate
        );
        assert_eq!(
            "Expect".parse::<SchemaPolicy>().unwrap(),
            SchemaPolicy::ExpectExisting
        );
        assert_eq!(
            "expect-existing".parse::<SchemaPolicy>().unwrap(),
            SchemaPolicy::ExpectExisting
        );
    }

    #[test]
    fn schema_policy_rejects_unknown_values() {
        assert!("drop-everything".parse::<SchemaPolicy>().is_err());
        assert!("".parse::<SchemaPolicy>().is_err());
    }
}
