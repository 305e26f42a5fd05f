//! HTTP client for the agency contact endpoint
//!
//! Sends the form snapshot as a JSON POST and maps the HTTP outcome onto
//! [`SubmitError`]. The body must be JSON whatever the status; an unreadable
//! body is a network failure. The whole exchange (send and body read) runs
//! under one deadline; when it expires the request future is dropped, which
//! cancels the connection.

use super::{ContactClientTrait, SubmissionOutcome, SubmitError};
use crate::config::TuiConfig;
use crate::state::{ErrorMap, FormSnapshot};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// Default contact endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/contact/post/message";

/// Default deadline for one exchange
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_SUCCESS_MESSAGE: &str =
    "Message sent successfully! We'll get back to you within 24 hours.";
const DEFAULT_CLIENT_ERROR: &str = "Something went wrong. Please try again.";

/// Response body shape shared by success and error responses
#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<Vec<FieldErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct FieldErrorEntry {
    #[serde(alias = "field")]
    param: String,
    #[serde(alias = "message")]
    msg: String,
}

/// Client for the contact endpoint
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl ContactClient {
    /// Create a client for `endpoint` with the given exchange deadline
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    /// Create a client from the user configuration
    pub fn from_config(config: &TuiConfig) -> Result<Self> {
        Self::new(config.contact_endpoint()?, config.submit_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn exchange(&self, snapshot: &FormSnapshot) -> SubmissionOutcome {
        let response = self
            .http
            .post(&self.endpoint)
            .json(snapshot)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;
        let body = parse_body(status, &bytes)?;

        if status.is_success() {
            let message = non_empty(body.message);
            return Ok(message.unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.into()));
        }

        Err(classify_failure(status, body))
    }
}

#[async_trait]
impl ContactClientTrait for ContactClient {
    async fn submit(&self, snapshot: FormSnapshot) -> SubmissionOutcome {
        tracing::info!("Submitting contact form to {}", self.endpoint);

        match tokio::time::timeout(self.timeout, self.exchange(&snapshot)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::warn!(
                    "Contact submission exceeded {}ms, exchange cancelled",
                    self.timeout.as_millis()
                );
                Err(SubmitError::Timeout)
            }
        }
    }
}

/// Every response must carry a JSON object, whatever its status
fn parse_body(status: StatusCode, bytes: &[u8]) -> Result<ResponseBody, SubmitError> {
    serde_json::from_slice(bytes).map_err(|e| SubmitError::Network {
        cause: format!("unreadable response body ({status}): {e}"),
    })
}

fn classify_failure(status: StatusCode, body: ResponseBody) -> SubmitError {
    // An empty list still counts as a validation answer
    if status == StatusCode::UNPROCESSABLE_ENTITY {
        if let Some(entries) = body.errors {
            let errors: ErrorMap = entries.into_iter().map(|e| (e.param, e.msg)).collect();
            return SubmitError::Validation(errors);
        }
    }

    if status.as_u16() >= 500 {
        return SubmitError::Server {
            status: status.as_u16(),
        };
    }

    SubmitError::Client {
        status: status.as_u16(),
        message: non_empty(body.message).unwrap_or_else(|| DEFAULT_CLIENT_ERROR.to_string()),
    }
}

fn transport_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        SubmitError::Timeout
    } else {
        SubmitError::Network {
            cause: err.to_string(),
        }
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ContactField;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PATH: &str = "/api/contact/post/message";

    fn snapshot() -> FormSnapshot {
        FormSnapshot {
            name: "Grace Hopper".to_string(),
            email: "grace@navy.mil".to_string(),
            subject: "Compiler work ".to_string(),
            message: "We would like a new website for our lab.".to_string(),
        }
    }

    fn client_for(server: &MockServer) -> ContactClient {
        client_with_timeout(server, Duration::from_secs(5))
    }

    fn client_with_timeout(server: &MockServer, timeout: Duration) -> ContactClient {
        ContactClient::new(format!("{}{PATH}", server.uri()), timeout).unwrap()
    }

    async fn respond_with(template: ResponseTemplate) -> (MockServer, SubmissionOutcome) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(PATH))
            .respond_with(template)
            .expect(1)
            .mount(&server)
            .await;
        let outcome = client_for(&server).submit(snapshot()).await;
        (server, outcome)
    }

    mod success {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_posts_json_snapshot_untrimmed() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path(PATH))
                .and(header("content-type", "application/json"))
                .and(body_json(json!({
                    "name": "Grace Hopper",
                    "email": "grace@navy.mil",
                    "subject": "Compiler work ",
                    "message": "We would like a new website for our lab."
                })))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
                .expect(1)
                .mount(&server)
                .await;

            let outcome = client_for(&server).submit(snapshot()).await;
            assert_eq!(outcome, Ok("ok".to_string()));
        }

        #[tokio::test]
        async fn test_default_message_when_body_has_none() {
            let (_server, outcome) =
                respond_with(ResponseTemplate::new(201).set_body_json(json!({}))).await;
            assert_eq!(outcome, Ok(DEFAULT_SUCCESS_MESSAGE.to_string()));
        }

        #[tokio::test]
        async fn test_empty_success_body_is_network_error() {
            let (_server, outcome) = respond_with(ResponseTemplate::new(204)).await;
            assert!(
                matches!(outcome, Err(SubmitError::Network { .. })),
                "unexpected outcome: {outcome:?}"
            );
        }

        #[tokio::test]
        async fn test_unreadable_success_body_is_network_error() {
            let (_server, outcome) =
                respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>")).await;
            assert!(
                matches!(outcome, Err(SubmitError::Network { .. })),
                "unexpected outcome: {outcome:?}"
            );
        }
    }

    mod failures {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_422_with_errors_is_validation() {
            let (_server, outcome) = respond_with(
                ResponseTemplate::new(422)
                    .set_body_json(json!({"errors": [{"param": "email", "msg": "taken"}]})),
            )
            .await;

            let errors = match outcome {
                Err(SubmitError::Validation(errors)) => errors,
                other => panic!("expected validation failure, got {other:?}"),
            };
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(ContactField::Email), Some("taken"));
        }

        #[tokio::test]
        async fn test_422_accepts_field_message_entries() {
            let (_server, outcome) = respond_with(
                ResponseTemplate::new(422)
                    .set_body_json(json!({"errors": [{"field": "name", "message": "too famous"}]})),
            )
            .await;

            let errors = match outcome {
                Err(SubmitError::Validation(errors)) => errors,
                other => panic!("expected validation failure, got {other:?}"),
            };
            assert_eq!(errors.get(ContactField::Name), Some("too famous"));
        }

        #[tokio::test]
        async fn test_422_without_errors_is_client_error() {
            let (_server, outcome) = respond_with(
                ResponseTemplate::new(422).set_body_json(json!({"message": "Unprocessable"})),
            )
            .await;
            assert_eq!(
                outcome,
                Err(SubmitError::Client {
                    status: 422,
                    message: "Unprocessable".to_string()
                })
            );
        }

        #[tokio::test]
        async fn test_422_with_empty_errors_is_validation() {
            let (_server, outcome) =
                respond_with(ResponseTemplate::new(422).set_body_json(json!({"errors": []}))).await;
            assert_eq!(outcome, Err(SubmitError::Validation(ErrorMap::new())));
        }

        #[tokio::test]
        async fn test_5xx_is_server_error() {
            let (_server, outcome) = respond_with(
                ResponseTemplate::new(503).set_body_json(json!({"message": "maintenance"})),
            )
            .await;
            assert_eq!(outcome, Err(SubmitError::Server { status: 503 }));
        }

        #[tokio::test]
        async fn test_unreadable_error_body_is_network_error() {
            for (status, body) in [(502, "<html>Bad Gateway</html>"), (404, "Not Found")] {
                let (_server, outcome) =
                    respond_with(ResponseTemplate::new(status).set_body_string(body)).await;
                assert!(
                    matches!(outcome, Err(SubmitError::Network { .. })),
                    "status {status}: unexpected outcome {outcome:?}"
                );
            }
        }

        #[tokio::test]
        async fn test_4xx_uses_body_message() {
            let (_server, outcome) = respond_with(
                ResponseTemplate::new(429).set_body_json(json!({"message": "Too many requests"})),
            )
            .await;
            assert_eq!(
                outcome,
                Err(SubmitError::Client {
                    status: 429,
                    message: "Too many requests".to_string()
                })
            );
        }

        #[tokio::test]
        async fn test_4xx_without_message_uses_default() {
            let (_server, outcome) =
                respond_with(ResponseTemplate::new(400).set_body_json(json!({}))).await;
            assert_eq!(
                outcome,
                Err(SubmitError::Client {
                    status: 400,
                    message: DEFAULT_CLIENT_ERROR.to_string()
                })
            );
        }

        #[tokio::test]
        async fn test_slow_response_times_out() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path(PATH))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(json!({"message": "late"}))
                        .set_delay(Duration::from_secs(3)),
                )
                .mount(&server)
                .await;

            let client = client_with_timeout(&server, Duration::from_millis(100));
            let outcome = client.submit(snapshot()).await;
            assert_eq!(outcome, Err(SubmitError::Timeout));
        }

        #[tokio::test]
        async fn test_refused_connection_is_network_error() {
            let port = {
                let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
                listener.local_addr().unwrap().port()
            };
            let client = ContactClient::new(
                format!("http://127.0.0.1:{port}{PATH}"),
                Duration::from_secs(5),
            )
            .unwrap();

            let outcome = client.submit(snapshot()).await;
            assert!(
                matches!(outcome, Err(SubmitError::Network { .. })),
                "unexpected outcome: {outcome:?}"
            );
        }
    }

    #[test]
    fn test_new_keeps_endpoint_and_timeout() {
        let client = ContactClient::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(client.timeout(), Duration::from_secs(10));
    }
}
