use std::collections::HashSet;
use std::net::IpAddr;

use anyhow::anyhow;
use course_auth::api_key::ApiKey;

use crate::config;
use crate::config::config_module::ConfigModule;
use crate::courses::{seed, Course, CourseFields};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const MIN_API_KEY_LEN: usize = 8;

/// Validated, ready-to-serve form of the configuration.
#[derive(Debug, Clone)]
pub struct Blueprint {
    pub server: Server,
    pub extensions: Extensions,
}

#[derive(Debug, Clone)]
pub struct Extensions {
    pub api_key: ApiKey,
    /// Courses the collection starts with.
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    pub hostname: IpAddr,
    pub workers: usize,
}

impl TryFrom<config::Server> for Server {
    type Error = anyhow::Error;

    fn try_from(server: config::Server) -> Result<Self, Self::Error> {
        let workers = server.get_workers();
        if workers == 0 {
            return Err(anyhow!("workers must be at least 1"));
        }

        let hostname = server.host.unwrap_or(DEFAULT_HOST.to_string());
        let hostname: IpAddr = if hostname.eq("localhost") {
            DEFAULT_HOST.parse()
        } else {
            hostname.parse()
        }
        .map_err(|_| anyhow!("Invalid host: {}", hostname))?;

        Ok(Server {
            port: server.port.unwrap_or(DEFAULT_PORT),
            hostname,
            workers,
        })
    }
}

impl TryFrom<ConfigModule> for Blueprint {
    type Error = anyhow::Error;

    fn try_from(config_module: ConfigModule) -> Result<Self, Self::Error> {
        let courses = match config_module.courses {
            Some(courses) => courses,
            None => seed::builtin()?,
        };
        validate_courses(&courses)?;

        let config = config_module.config;
        let api_key = validate_api_key(config.auth.api_key.as_deref())?;
        let server = Server::try_from(config.server)?;

        Ok(Self {
            server,
            extensions: Extensions { api_key, courses },
        })
    }
}

fn validate_api_key(api_key: Option<&str>) -> anyhow::Result<ApiKey> {
    match api_key {
        Some(key) if key.len() >= MIN_API_KEY_LEN => Ok(ApiKey::new(key)),
        Some(_) => Err(anyhow!(
            "api_key must be at least {} characters long",
            MIN_API_KEY_LEN
        )),
        None => Err(anyhow!(
            "api_key is required, set auth.api_key in the config or the SECRET_KEY variable"
        )),
    }
}

fn validate_courses(courses: &[Course]) -> anyhow::Result<()> {
    let mut ids = HashSet::new();
    for course in courses {
        if !ids.insert(&course.id) {
            return Err(anyhow!("Duplicate course id: {}", course.id));
        }
        CourseFields::from(course.clone())
            .into_course(course.id.clone())
            .map_err(|_| anyhow!("Invalid course with id: {}", course.id))?;
    }
    Ok(())
}
