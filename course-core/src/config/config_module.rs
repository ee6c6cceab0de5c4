use crate::config::Config;
use crate::courses::Course;
use crate::runtime::TargetRuntime;
use anyhow::Context;
use std::ops::Deref;

/// Overrides `server.port`.
pub const PORT_ENV: &str = "PORT";
/// Overrides `auth.api_key`.
pub const SECRET_KEY_ENV: &str = "SECRET_KEY";

#[derive(Default, Debug, Clone)]
pub struct ConfigModule {
    pub config: Config,
    /// Seed loaded from `config.courses`, if one was named.
    pub courses: Option<Vec<Course>>,
}

impl Deref for ConfigModule {
    type Target = Config;
    fn deref(&self) -> &Self::Target {
        &self.config
    }
}

impl From<Config> for ConfigModule {
    fn from(value: Config) -> Self {
        Self {
            config: value,
            courses: None,
        }
    }
}

impl ConfigModule {
    /// Applies environment overrides on top of the file config.
    pub fn resolve(self, target_runtime: &TargetRuntime) -> anyhow::Result<Self> {
        let mut config = self.config;

        if let Some(port) = target_runtime.env.get(PORT_ENV) {
            let port = port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{} must be a valid port number, got: {}", PORT_ENV, port))?;
            config.server.port = Some(port);
        }
        if let Some(key) = target_runtime.env.get(SECRET_KEY_ENV) {
            config.auth.api_key = Some(key.into_owned());
        }

        Ok(ConfigModule { config, ..self })
    }
}
