use crate::is_default;
use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "is_default")]
    pub server: Server,
    #[serde(default, skip_serializing_if = "is_default")]
    pub auth: AuthInfo,
    /// Seed file for the course collection, a path relative to this
    /// config file or an http(s) URL. The built-in seed is used when unset.
    #[serde(default, skip_serializing_if = "is_default")]
    pub courses: Option<String>,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        if pretty {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(serde_json::to_string(self)?)
        }
    }

    /// JSON schema of the config file.
    pub fn schema_json() -> Result<String> {
        let schema = schemars::schema_for!(Config);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}

#[derive(Default, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Server {
    #[serde(default, skip_serializing_if = "is_default")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "is_default")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "is_default")]
    pub workers: Option<usize>,
}

impl Server {
    pub fn get_workers(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }
}

#[derive(Default, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthInfo {
    /// Shared secret expected in the `api-key` header of `GET /courses`.
    #[serde(default, skip_serializing_if = "is_default")]
    pub api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults() -> Result<()> {
        let config = Config::from_json("{}")?;
        assert_eq!(config, Config::default());
        assert!(config.server.get_workers() >= 1);
        Ok(())
    }

    #[test]
    fn test_round_trip_skips_defaults() -> Result<()> {
        let config = Config::from_json(
            r#"{"server":{"port":3000,"workers":2},"auth":{"api_key":"secret-key"}}"#,
        )?;
        assert_eq!(config.server.port, Some(3000));
        assert_eq!(config.server.get_workers(), 2);
        insta::assert_snapshot!(
            config.to_json(false)?,
            @r#"{"server":{"port":3000,"workers":2},"auth":{"api_key":"secret-key"}}"#
        );
        Ok(())
    }

    #[test]
    fn test_schema_json() -> Result<()> {
        let schema: serde_json::Value = serde_json::from_str(&Config::schema_json()?)?;
        assert_eq!(schema["title"], "Config");
        assert!(schema["properties"]["server"].is_object());
        assert!(schema["properties"]["courses"].is_object());
        Ok(())
    }
}
