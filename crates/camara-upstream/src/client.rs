//! HTTP client for issuing requests to the open-data API

use camara_core::{Error, Result};
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Client for issuing JSON `GET` requests against the upstream API.
///
/// The client holds a fixed base URL; callers pass endpoint paths
/// relative to it. Every request asks for `application/json` and the
/// body is decoded before it is returned, so a malformed upstream
/// payload surfaces as [`Error::Decode`] instead of leaking through
/// the gateway.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base: String,
}

impl UpstreamClient {
    /// Create a client for the given base URL.
    ///
    /// The base URL must be an absolute `http` or `https` URL; a
    /// trailing slash is tolerated. `timeout` bounds each request end
    /// to end, `None` leaves requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = base_url.trim_end_matches('/').to_string();

        let parsed = Url::parse(&base)
            .map_err(|e| Error::Config(format!("invalid upstream base URL '{base_url}': {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::Config(format!(
                "unsupported upstream scheme '{}'",
                parsed.scheme()
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, base })
    }

    /// Base URL requests are issued against, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Issue a `GET` against `endpoint` and decode the JSON response.
    ///
    /// Non-2xx statuses are reported as [`Error::Upstream`] carrying
    /// the upstream status and body verbatim so the gateway can mirror
    /// them. Transport failures and timeouts map to [`Error::Network`].
    pub async fn forward(&self, endpoint: &str, query: &[(String, String)]) -> Result<Value> {
        let url = self.endpoint_url(endpoint, query)?;

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::upstream(status.as_u16(), body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| Error::Decode(e.to_string()))
    }

    /// Build the full URL for an endpoint and its query parameters.
    ///
    /// The endpoint is joined onto the base path verbatim, so any
    /// percent-encoding present in path values is forwarded unchanged.
    /// No `?` is emitted when `query` is empty.
    fn endpoint_url(&self, endpoint: &str, query: &[(String, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base, endpoint))
            .map_err(|e| Error::Internal(format!("invalid endpoint '{endpoint}': {e}")))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(UpstreamClient::new("not a url", None).is_err());
        assert!(UpstreamClient::new("ftp://example.org/api", None).is_err());
    }

    #[test]
    fn test_trims_trailing_slash() {
        let client = UpstreamClient::new("https://example.org/api/v2/", None).unwrap();
        assert_eq!(client.base_url(), "https://example.org/api/v2");
    }

    #[test]
    fn test_endpoint_url_without_query_has_no_question_mark() {
        let client = UpstreamClient::new("https://example.org/api/v2", None).unwrap();
        let url = client.endpoint_url("blocos", &[]).unwrap();
        assert_eq!(url.as_str(), "https://example.org/api/v2/blocos");
    }

    #[test]
    fn test_endpoint_url_appends_query_pairs_in_order() {
        let client = UpstreamClient::new("https://example.org/api/v2", None).unwrap();
        let url = client
            .endpoint_url("deputados", &query(&[("pagina", "1"), ("itens", "15")]))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.org/api/v2/deputados?pagina=1&itens=15"
        );
    }

    #[test]
    fn test_endpoint_url_encodes_query_values() {
        let client = UpstreamClient::new("https://example.org/api/v2", None).unwrap();
        let url = client
            .endpoint_url("deputados", &query(&[("nome", "João Silva")]))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.org/api/v2/deputados?nome=Jo%C3%A3o+Silva"
        );
    }

    #[tokio::test]
    async fn test_forward_decodes_json_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/deputados"))
            .and(query_param("pagina", "1"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "dados": [{"id": 204379, "nome": "Acácio Favacho"}]
            })))
            .mount(&server)
            .await;

        let client = UpstreamClient::new(&server.uri(), None).unwrap();
        let value = client
            .forward("deputados", &query(&[("pagina", "1")]))
            .await
            .unwrap();
        assert_eq!(value["dados"][0]["id"], 204379);
    }

    #[tokio::test]
    async fn test_forward_mirrors_upstream_error_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/deputados/999999"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_raw("{\"detail\":\"no rows\"}", "application/json"),
            )
            .mount(&server)
            .await;

        let client = UpstreamClient::new(&server.uri(), None).unwrap();
        let err = client.forward("deputados/999999", &[]).await.unwrap_err();
        match err {
            Error::Upstream { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "{\"detail\":\"no rows\"}");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_forward_rejects_malformed_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/referencias/ufs"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"))
            .mount(&server)
            .await;

        let client = UpstreamClient::new(&server.uri(), None).unwrap();
        let err = client.forward("referencias/ufs", &[]).await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_forward_reports_connection_failure_as_network() {
        // Bind a listener and drop it so the port refuses connections.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = UpstreamClient::new(&format!("http://{addr}"), None).unwrap();
        let err = client.forward("deputados", &[]).await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }

    #[tokio::test]
    async fn test_forward_honors_request_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/votacoes"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"dados": []}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let client = UpstreamClient::new(&server.uri(), Some(Duration::from_millis(100))).unwrap();
        let err = client.forward("votacoes", &[]).await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }

    #[tokio::test]
    async fn test_forward_sends_repeated_keys_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/deputados"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"dados": []})),
            )
            .mount(&server)
            .await;

        let client = UpstreamClient::new(&server.uri(), None).unwrap();
        client
            .forward(
                "deputados",
                &query(&[("id", "1"), ("id", "2"), ("pagina", "1")]),
            )
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.query(), Some("id=1&id=2&pagina=1"));
    }
}
