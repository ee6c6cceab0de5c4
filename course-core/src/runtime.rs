use std::sync::Arc;

use crate::{EnvIO, FileIO, HttpIO};

/// The TargetRuntime struct unifies the available runtime-specific
/// IO implementations. This is used to reduce piping IO structs all
/// over the codebase.
#[derive(Clone)]
pub struct TargetRuntime {
    /// HTTP client for making standard HTTP requests.
    pub http: Arc<dyn HttpIO>,
    /// Interface for file operations, tailored to the target environment's
    /// capabilities.
    pub file: Arc<dyn FileIO>,
    /// Read access to environment variables.
    pub env: Arc<dyn EnvIO>,
}

#[cfg(test)]
pub mod tests {

    use std::borrow::Cow;
    use std::collections::HashMap;
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use dashmap::DashMap;
    use hyper::body::Bytes;
    use reqwest::Client;

    use crate::http::response::Response;
    use crate::runtime::TargetRuntime;
    use crate::{EnvIO, FileIO, HttpIO};

    #[derive(Default)]
    struct TestHttp {
        client: Client,
    }

    impl TestHttp {
        fn init() -> Arc<Self> {
            Arc::new(Self::default())
        }
    }

    #[async_trait::async_trait]
    impl HttpIO for TestHttp {
        async fn execute(&self, request: reqwest::Request) -> Result<Response<Bytes>> {
            let response = self.client.execute(request).await;
            Response::from_reqwest(
                response?
                    .error_for_status()
                    .map_err(|err| err.without_url())?,
            )
            .await
        }
    }

    #[derive(Clone)]
    struct TestFileIO {
        hm: DashMap<String, Vec<u8>>,
    }

    impl TestFileIO {
        fn init(files: &[(&str, &str)]) -> Self {
            let hm = DashMap::new();
            for (path, content) in files {
                hm.insert(path.to_string(), content.as_bytes().to_vec());
            }
            TestFileIO { hm }
        }
    }

    #[async_trait::async_trait]
    impl FileIO for TestFileIO {
        async fn read<'a>(&'a self, path: &'a str) -> anyhow::Result<String> {
            let buffer = self
                .hm
                .get(path)
                .context(format!("File: {} not found", path))?
                .clone();
            Ok(String::from_utf8(buffer)?)
        }
    }

    struct TestEnvIO {
        vars: HashMap<String, String>,
    }

    impl EnvIO for TestEnvIO {
        fn get(&self, key: &str) -> Option<Cow<'_, str>> {
            self.vars.get(key).map(|v| Cow::Borrowed(v.as_str()))
        }
    }

    /// Test runtime whose file system holds exactly `files`.
    pub fn init_with(vars: &[(&str, &str)], files: &[(&str, &str)]) -> TargetRuntime {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TargetRuntime {
            http: TestHttp::init(),
            file: Arc::new(TestFileIO::init(files)),
            env: Arc::new(TestEnvIO { vars }),
        }
    }

    pub fn init_with_env(vars: &[(&str, &str)]) -> TargetRuntime {
        init_with(vars, &[])
    }

    pub fn init() -> TargetRuntime {
        init_with(&[], &[])
    }
}
