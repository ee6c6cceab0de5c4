use bytes::Bytes;
use course_core::http::response::Response;
use course_core::HttpIO;
use reqwest::{Client, Request};

#[derive(Default, Clone)]
pub struct NativeHttp {
    client: Client,
}

#[async_trait::async_trait]
impl HttpIO for NativeHttp {
    async fn execute(&self, request: Request) -> anyhow::Result<Response<Bytes>> {
        log::info!(
            "{} {} {:?}",
            request.method(),
            request.url(),
            request.version()
        );
        log::debug!("request: {:?}", request);
        let response = self
            .client
            .execute(request)
            .await?
            .error_for_status()
            .map_err(|err| err.without_url())?;
        log::debug!("response: {:?}", response);

        Response::from_reqwest(response).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use super::*;

    #[tokio::test]
    async fn test_native_http_get_request() {
        let server = httpmock::MockServer::start_async().await;

        let config_serv = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET).path("/config.json");
                then.status(200).body("{}");
            })
            .await;

        let native_http = NativeHttp::default();
        let request_url = format!("http://localhost:{}/config.json", server.port());
        let request = Request::new(Method::GET, request_url.parse().unwrap());

        let result = native_http.execute(request).await;

        assert!(result.is_ok());
        let response = result.unwrap();
        assert_eq!(response.status, reqwest::StatusCode::OK);
        assert_eq!(response.body, Bytes::from("{}"));

        config_serv.assert_async().await;
    }

    #[tokio::test]
    async fn test_native_http_error_status() {
        let server = httpmock::MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET).path("/missing.json");
                then.status(404);
            })
            .await;

        let native_http = NativeHttp::default();
        let request_url = format!("http://localhost:{}/missing.json", server.port());
        let request = Request::new(Method::GET, request_url.parse().unwrap());

        assert!(native_http.execute(request).await.is_err());
    }
}
