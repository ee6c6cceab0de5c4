#![allow(clippy::module_inception)]

use std::borrow::Cow;

pub mod app_ctx;
pub mod blueprint;
pub mod config;
pub mod courses;
pub mod http;
pub mod runtime;

pub fn is_default<T: Default + PartialEq>(val: &T) -> bool {
    *val == T::default()
}

pub trait EnvIO: Send + Sync + 'static {
    fn get(&self, key: &str) -> Option<Cow<'_, str>>;
}

#[async_trait::async_trait]
pub trait HttpIO: Sync + Send + 'static {
    async fn execute(
        &self,
        request: reqwest::Request,
    ) -> anyhow::Result<http::response::Response<bytes::Bytes>>;
}

#[async_trait::async_trait]
pub trait FileIO: Send + Sync {
    async fn read<'a>(&'a self, path: &'a str) -> anyhow::Result<String>;
}
