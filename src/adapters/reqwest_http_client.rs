use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::core::interfaces::adapters::{HttpClient, HttpResponse};
use crate::core::models::SearchError;
use crate::global_constants;

pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn build() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(global_constants::HTTP_TIMEOUT_SECONDS))
            .user_agent(global_constants::HTTP_USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, SearchError> {
        log::debug!("[HTTP] GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        log::debug!("[HTTP] {} returned {} ({} bytes)", url, status, body.len());

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn create_local_client() -> ReqwestHttpClient {
        ReqwestHttpClient {
            client: reqwest::Client::builder().no_proxy().build().unwrap(),
        }
    }

    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await.unwrap_or(0);
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/v1/gifs/search?q=cats", address)
    }

    #[test]
    fn test_build_succeeds_with_default_settings() {
        assert!(ReqwestHttpClient::build().is_ok());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_get_returns_status_and_body() {
        let url = serve_once("200 OK", r#"{"data":[]}"#).await;
        let client = create_local_client();

        let response = client.get(&url).await.unwrap();

        assert_eq!(response.status, 200);
        assert!(response.is_success());
        assert_eq!(response.body, br#"{"data":[]}"#.to_vec());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_get_passes_error_status_through() {
        let url = serve_once("404 Not Found", r#"{"message":"nope"}"#).await;
        let client = create_local_client();

        let response = client.get(&url).await.unwrap();

        assert_eq!(response.status, 404);
        assert!(!response.is_success());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_get_unreachable_host_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        let client = create_local_client();

        let result = client.get(&format!("http://{}/", address)).await;

        assert!(matches!(result, Err(SearchError::Transport(_))));
    }
}
