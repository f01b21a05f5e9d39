use crate::core::{RegistryClient, RegistryReply, RegistrySettings};
use crate::utils::error::{CheckError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Registry client posting form-encoded lookups over HTTP.
pub struct HttpRegistryClient {
    client: Client,
    endpoint: String,
    taxpayer_kind: String,
}

impl HttpRegistryClient {
    pub fn new<C: RegistrySettings>(settings: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.registry_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: settings.registry_endpoint().to_string(),
            taxpayer_kind: settings.taxpayer_kind().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RegistryClient for HttpRegistryClient {
    async fn lookup(&self, inn: &str) -> Result<RegistryReply> {
        let form = [("k", self.taxpayer_kind.as_str()), ("inn", inn)];

        tracing::debug!(inn, endpoint = %self.endpoint, "sending registry request");
        let response = self.client.post(&self.endpoint).form(&form).send().await?;

        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(inn, %status, bytes = body.len(), "registry responded");

        let reply: RegistryReply = match serde_json::from_slice(&body) {
            Ok(reply) => reply,
            Err(_) if !status.is_success() => {
                return Err(CheckError::UpstreamStatus {
                    status: status.as_u16(),
                })
            }
            Err(e) => return Err(CheckError::ReplyDecode(e)),
        };

        // Registry-reported errors win over the status line.
        if reply.first_error().is_none() && !status.is_success() {
            return Err(CheckError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    struct MockSettings {
        endpoint: String,
        timeout: Duration,
    }

    impl MockSettings {
        fn new(endpoint: String) -> Self {
            Self {
                endpoint,
                timeout: Duration::from_secs(5),
            }
        }
    }

    impl RegistrySettings for MockSettings {
        fn registry_endpoint(&self) -> &str {
            &self.endpoint
        }

        fn taxpayer_kind(&self) -> &str {
            "fl"
        }

        fn registry_timeout(&self) -> Duration {
            self.timeout
        }
    }

    #[tokio::test]
    async fn test_lookup_posts_form_and_decodes_date() {
        let server = MockServer::start_async().await;
        let registry_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/invalid-inn-proc.json")
                    .x_www_form_urlencoded_tuple("k", "fl")
                    .x_www_form_urlencoded_tuple("inn", "1234567890");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({"inn": "1234567890", "date": "2020-01-01"}));
            })
            .await;

        let client =
            HttpRegistryClient::new(&MockSettings::new(server.url("/invalid-inn-proc.json"))).unwrap();
        let reply = client.lookup("1234567890").await.unwrap();

        registry_mock.assert_async().await;
        assert_eq!(reply.date, "2020-01-01");
        assert!(reply.first_error().is_none());
    }

    #[tokio::test]
    async fn test_lookup_returns_registry_errors() {
        let server = MockServer::start_async().await;
        let registry_mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/invalid-inn-proc.json");
                then.status(200).json_body(serde_json::json!({
                    "errors": {"inn": ["Неправильное контрольное число", "ignored"]}
                }));
            })
            .await;

        let client =
            HttpRegistryClient::new(&MockSettings::new(server.url("/invalid-inn-proc.json"))).unwrap();
        let reply = client.lookup("123").await.unwrap();

        registry_mock.assert_async().await;
        assert_eq!(reply.first_error(), Some("Неправильное контрольное число"));
    }

    #[tokio::test]
    async fn test_lookup_rejects_non_json_reply() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/invalid-inn-proc.json");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let client =
            HttpRegistryClient::new(&MockSettings::new(server.url("/invalid-inn-proc.json"))).unwrap();
        let err = client.lookup("1234567890").await.unwrap_err();

        assert!(matches!(err, CheckError::ReplyDecode(_)));
    }

    #[tokio::test]
    async fn test_lookup_reports_error_status_without_registry_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/invalid-inn-proc.json");
                then.status(503).body("unavailable");
            })
            .await;

        let client =
            HttpRegistryClient::new(&MockSettings::new(server.url("/invalid-inn-proc.json"))).unwrap();
        let err = client.lookup("1234567890").await.unwrap_err();

        assert!(matches!(err, CheckError::UpstreamStatus { status: 503 }));
    }

    #[tokio::test]
    async fn test_lookup_keeps_registry_errors_on_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/invalid-inn-proc.json");
                then.status(400)
                    .json_body(serde_json::json!({"errors": {"inn": ["Некорректный ИНН"]}}));
            })
            .await;

        let client =
            HttpRegistryClient::new(&MockSettings::new(server.url("/invalid-inn-proc.json"))).unwrap();
        let reply = client.lookup("0").await.unwrap();

        assert_eq!(reply.first_error(), Some("Некорректный ИНН"));
    }

    #[tokio::test]
    async fn test_lookup_times_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/slow");
                then.status(200)
                    .delay(Duration::from_millis(500))
                    .json_body(serde_json::json!({}));
            })
            .await;

        let mut settings = MockSettings::new(server.url("/slow"));
        settings.timeout = Duration::from_millis(50);
        let client = HttpRegistryClient::new(&settings).unwrap();

        let err = client.lookup("1234567890").await.unwrap_err();
        assert!(matches!(err, CheckError::Transport(_)));
    }
}
