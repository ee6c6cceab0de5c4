use std::borrow::Cow;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use bytes::Bytes;
use course_core::http::response::Response;
use course_core::runtime::TargetRuntime;
use course_core::{EnvIO, FileIO, HttpIO};
use reqwest::Client;
use tokio::io::AsyncReadExt;

#[derive(Clone, Default)]
struct TestHttp {
    client: Client,
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
struct TestFileIO {}

#[async_trait::async_trait]
impl FileIO for TestFileIO {
    async fn read<'a>(&'a self, path: &'a str) -> anyhow::Result<String> {
        let mut file = tokio::fs::File::open(path).await?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)
            .await
            .map_err(|e| anyhow!("{}", e))?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// Sees no variables, so the host environment cannot leak into a test.
struct EmptyEnv;

impl EnvIO for EmptyEnv {
    fn get(&self, _key: &str) -> Option<Cow<'_, str>> {
        None
    }
}

pub fn init() -> TargetRuntime {
    TargetRuntime {
        http: Arc::new(TestHttp::default()),
        file: Arc::new(TestFileIO {}),
        env: Arc::new(EmptyEnv),
    }
}
