use course_core::EnvIO;
use std::borrow::Cow;

#[derive(Default, Clone)]
pub struct NativeEnvIO {}

impl EnvIO for NativeEnvIO {
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        std::env::var(key).ok().map(Cow::Owned)
    }
}
