use anyhow::{Context, Result};
use bytes::Bytes;
use derive_setters::Setters;
use http_body_util::Full;
use serde::Serialize;
use std::str::FromStr;

#[derive(Clone, Debug, Default, Setters)]
pub struct Response<Body: Default + Clone> {
    pub status: reqwest::StatusCode,
    pub headers: reqwest::header::HeaderMap,
    pub body: Body,
}

impl Response<Bytes> {
    pub async fn from_reqwest(resp: reqwest::Response) -> Result<Self> {
        let status = resp.status();
        let headers = resp.headers().to_owned();
        let body = resp.bytes().await?;
        Ok(Response {
            status,
            headers,
            body,
        })
    }

    /// Serializes `body` as the JSON payload of a response with the given status.
    pub fn json<T: Serialize>(status: reqwest::StatusCode, body: &T) -> Result<Self> {
        Ok(Self::from_json_bytes(
            status,
            Bytes::from(serde_json::to_vec(body)?),
        ))
    }

    pub fn from_json_bytes(status: reqwest::StatusCode, body: Bytes) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        Response::default()
            .status(status)
            .headers(headers)
            .body(body)
    }

    pub fn to_resp_string(self) -> Result<Response<String>> {
        Ok(Response::<String> {
            body: String::from_utf8(self.body.to_vec())?,
            status: self.status,
            headers: self.headers,
        })
    }

    pub fn into_hyper(self) -> Result<hyper::Response<Full<Bytes>>> {
        let mut builder =
            hyper::Response::builder().status(hyper::StatusCode::from_u16(self.status.as_u16())?);
        for (key, value) in self.headers {
            builder = builder.header(
                hyper::header::HeaderName::from_str(key.context("Invalid header key")?.as_str())?,
                hyper::header::HeaderValue::from_bytes(value.as_bytes())?,
            );
        }
        Ok(builder.body(Full::new(self.body))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use reqwest::StatusCode;

    #[test]
    fn test_json() -> Result<()> {
        let response = Response::json(StatusCode::NOT_FOUND, &serde_json::json!({"a": 1}))?;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers.get(reqwest::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(response.body, Bytes::from(r#"{"a":1}"#));
        Ok(())
    }

    #[test]
    fn test_to_resp_string() {
        let response = Response {
            status: StatusCode::OK,
            headers: reqwest::header::HeaderMap::new(),
            body: Bytes::from("hello world"),
        };
        let string_response: Result<Response<String>> = response.to_resp_string();
        assert!(string_response.is_ok());
        assert_eq!(string_response.unwrap().body, "hello world");
    }

    #[tokio::test]
    async fn test_into_hyper() -> Result<()> {
        let response = Response::json(StatusCode::CREATED, &vec![1, 2, 3])?;
        let hyper_response = response.into_hyper()?;
        assert_eq!(hyper_response.status(), hyper::StatusCode::CREATED);
        assert_eq!(
            hyper_response
                .headers()
                .get(hyper::header::CONTENT_TYPE)
                .unwrap(),
            "application/json"
        );
        let bytes = hyper_response.into_body().collect().await?.to_bytes();
        assert_eq!(bytes, Bytes::from("[1,2,3]"));
        Ok(())
    }
}
