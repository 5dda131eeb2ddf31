//! HTTP client for the Formspree form endpoint

use super::error::SubmissionError;
use super::traits::LeadSubmitter;
use crate::state::LeadData;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Url;
use std::time::Duration;

/// Posts leads as JSON to a fixed form endpoint
pub struct FormspreeClient {
    http_client: reqwest::Client,
    endpoint: Url,
}

impl FormspreeClient {
    /// Create a client for `endpoint` with the given request timeout
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("lead-intake/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LeadSubmitter for FormspreeClient {
    async fn submit(&self, lead: &LeadData) -> Result<(), SubmissionError> {
        tracing::debug!(endpoint = %self.endpoint, "POST lead");

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(lead)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %body, "Form endpoint rejected lead");
            return Err(SubmissionError::Status(status));
        }

        tracing::debug!(%status, "Form endpoint accepted lead");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Moment, PAIN_CATALOGUE};
    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Captured request line, headers and body
    struct CapturedRequest {
        head: String,
        body: String,
    }

    /// Serve exactly one HTTP request with the given status line
    async fn stub_endpoint(status_line: &'static str) -> (Url, oneshot::Receiver<CapturedRequest>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            let (head, body) = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                buf.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&buf).to_string();
                if let Some(split) = text.find("\r\n\r\n") {
                    let head = text[..split].to_string();
                    let content_length = head
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0);
                    let body_start = split + 4;
                    if buf.len() >= body_start + content_length {
                        let body =
                            String::from_utf8_lossy(&buf[body_start..body_start + content_length])
                                .to_string();
                        break (head, body);
                    }
                }
                if n == 0 {
                    break (text, String::new());
                }
            };

            let response =
                format!("{status_line}\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{{}}");
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            let _ = tx.send(CapturedRequest { head, body });
        });

        let url = Url::parse(&format!("http://{addr}/f/test-form")).unwrap();
        (url, rx)
    }

    fn sample_lead() -> LeadData {
        let mut lead = LeadData::new();
        lead.set_name("Ana");
        lead.set_business_name("Ana Studio");
        lead.set_contact("ana@x.com");
        lead.set_moment(Some(Moment::Zero));
        lead.toggle_pain(PAIN_CATALOGUE[0]);
        lead.set_success_goal("agenda cheia");
        lead
    }

    #[tokio::test]
    async fn test_success_status_is_ok() {
        let (url, captured) = stub_endpoint("HTTP/1.1 200 OK").await;
        let client = FormspreeClient::new(url, Duration::from_secs(5)).unwrap();

        tokio_test::assert_ok!(client.submit(&sample_lead()).await);

        let request = captured.await.unwrap();
        assert!(request.head.starts_with("POST /f/test-form HTTP/1.1"));
        assert!(request
            .head
            .to_ascii_lowercase()
            .contains("content-type: application/json"));

        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body, serde_json::to_value(sample_lead()).unwrap());
    }

    #[tokio::test]
    async fn test_error_status_is_failure() {
        let (url, _captured) = stub_endpoint("HTTP/1.1 500 Internal Server Error").await;
        let client = FormspreeClient::new(url, Duration::from_secs(5)).unwrap();

        let err = tokio_test::assert_err!(client.submit(&sample_lead()).await);
        assert!(matches!(
            err,
            SubmissionError::Status(s) if s == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{addr}/f/none")).unwrap();
        let client = FormspreeClient::new(url, Duration::from_secs(2)).unwrap();

        let err = tokio_test::assert_err!(client.submit(&sample_lead()).await);
        assert!(matches!(err, SubmissionError::Transport(_)));
    }
}
