use crate::config::config_module::ConfigModule;
use crate::config::Config;
use crate::courses::seed;
use crate::runtime::TargetRuntime;
use anyhow::Context;
use reqwest::Url;
use std::path::Path;

/// Reads the configuration from a file or from an HTTP URL, loads the
/// course seed it points to and applies environment overrides.
pub struct ConfigReader {
    runtime: TargetRuntime,
}

/// Response of a file read operation
#[derive(Debug)]
struct FileRead {
    content: String,
    path: String,
}

impl ConfigReader {
    pub fn init(runtime: TargetRuntime) -> Self {
        Self { runtime }
    }

    /// Reads the config file and returns serialized config
    pub async fn read<T: AsRef<str>>(&self, file: T) -> anyhow::Result<ConfigModule> {
        let file = self.read_file(file).await?;
        let config = Config::from_json(&file.content)
            .with_context(|| format!("Unable to parse config: {}", file.path))?;

        let courses = match config.courses.as_deref() {
            Some(courses) => {
                let location = locate(&file.path, courses)?;
                let seed_file = self.read_file(&location).await?;
                let courses = seed::parse(&seed_file.content)
                    .with_context(|| format!("Unable to parse course seed: {}", location))?;
                Some(courses)
            }
            None => None,
        };

        ConfigModule { config, courses }.resolve(&self.runtime)
    }

    /// Reads a file from the filesystem or from an HTTP URL
    async fn read_file<T: AsRef<str>>(&self, file: T) -> anyhow::Result<FileRead> {
        let content = if let Some(url) = as_url(file.as_ref()) {
            let response = self
                .runtime
                .http
                .execute(reqwest::Request::new(reqwest::Method::GET, url))
                .await?;

            response.to_resp_string()?.body
        } else {
            self.runtime
                .file
                .read(file.as_ref())
                .await
                .with_context(|| format!("Unable to read file: {}", file.as_ref()))?
        };

        Ok(FileRead {
            content,
            path: file.as_ref().to_string(),
        })
    }
}

fn as_url(location: &str) -> Option<Url> {
    Url::parse(location)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

/// Resolves `target` against the location of the file that referenced it.
fn locate(base: &str, target: &str) -> anyhow::Result<String> {
    if as_url(target).is_some() || Path::new(target).is_absolute() {
        return Ok(target.to_string());
    }
    if let Some(base) = as_url(base) {
        return Ok(base.join(target)?.to_string());
    }
    let path = match Path::new(base).parent() {
        Some(parent) => parent.join(target),
        None => Path::new(target).to_path_buf(),
    };
    Ok(path.to_string_lossy().into_owned())
}
