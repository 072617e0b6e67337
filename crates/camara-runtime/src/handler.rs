//! HTTP request handler

use camara_core::{Body, Error, Result, ResponseBuilder};
use camara_router::Router;
use camara_upstream::UpstreamClient;
use http::{Method, Request, Response, StatusCode};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// HTTP request handler
///
/// Matches each request against the route catalog, marshals its query
/// parameters and forwards it to the upstream API. The request body is
/// never read; every route is a plain `GET` passthrough.
#[derive(Debug, Clone)]
pub struct RequestHandler {
    router: Arc<Router>,
    client: Arc<UpstreamClient>,
    request_count: Arc<AtomicUsize>,
}

impl RequestHandler {
    /// Create a new request handler
    pub fn new(
        router: Arc<Router>,
        client: Arc<UpstreamClient>,
        request_count: Arc<AtomicUsize>,
    ) -> Self {
        Self {
            router,
            client,
            request_count,
        }
    }

    /// Handle an incoming HTTP request
    pub async fn handle<B>(&self, req: Request<B>) -> Result<Response<Body>> {
        let _in_flight = InFlightGuard::new(Arc::clone(&self.request_count));

        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let query = req.uri().query().map(|q| q.to_string());
        let start = Instant::now();

        debug!(method = %method, path = %path, "Handling request");

        let result = self.forward(&method, &path, query.as_deref()).await;

        match result {
            Ok(value) => {
                info!(
                    method = %method,
                    path = %path,
                    latency_ms = start.elapsed().as_millis(),
                    "Request forwarded"
                );
                ResponseBuilder::new(StatusCode::OK).json_body(&value)
            }
            Err(e) => {
                let status = e.to_status_code();
                match &e {
                    Error::RouteNotFound(_) | Error::BadRequest(_) | Error::MethodNotAllowed(_) => {
                        warn!(
                            method = %method,
                            path = %path,
                            status = status.as_u16(),
                            error = %e,
                            "Request rejected"
                        );
                    }
                    _ => {
                        error!(
                            method = %method,
                            path = %path,
                            status = status.as_u16(),
                            error = %e,
                            "Request failed"
                        );
                    }
                }
                error_response(e)
            }
        }
    }

    async fn forward(&self, method: &Method, path: &str, raw_query: Option<&str>) -> Result<Value> {
        if method != Method::GET {
            return Err(Error::MethodNotAllowed(method.to_string()));
        }

        let matched = self.router.find(path)?;
        let plan = camara_router::plan(&matched, raw_query)?;

        debug!(
            endpoint = %plan.endpoint,
            params = plan.query.len(),
            "Forwarding to upstream"
        );

        self.client.forward(&plan.endpoint, &plan.query).await
    }
}

/// Holds one slot in the in-flight gauge for the lifetime of a request.
///
/// The decrement runs in `Drop`, so a handler future torn down at an
/// await point (client abort, connection reset) releases its slot the
/// same way a completed request does.
struct InFlightGuard {
    count: Arc<AtomicUsize>,
}

impl InFlightGuard {
    fn new(count: Arc<AtomicUsize>) -> Self {
        count.fetch_add(1, Ordering::Relaxed);
        Self { count }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.count.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Build the HTTP response for a failed request
///
/// Upstream failures are mirrored verbatim, status and body alike.
/// Everything else gets a small JSON error document.
fn error_response(error: Error) -> Result<Response<Body>> {
    let status = error.to_status_code();

    match error {
        Error::Upstream { body, .. } => ResponseBuilder::new(status).json_raw(body),
        other => ResponseBuilder::new(status).json_body(&json!({ "error": other.to_string() })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler_for(base_url: &str) -> RequestHandler {
        RequestHandler::new(
            Arc::new(Router::new().unwrap()),
            Arc::new(UpstreamClient::new(base_url, None).unwrap()),
            Arc::new(AtomicUsize::new(0)),
        )
    }

    fn get(uri: &str) -> Request<()> {
        Request::builder().method(Method::GET).uri(uri).body(()).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let handler = handler_for("http://127.0.0.1:1");

        let response = handler.handle(get("/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_get_is_405() {
        let handler = handler_for("http://127.0.0.1:1");

        let req = Request::builder()
            .method(Method::POST)
            .uri("/deputados")
            .body(())
            .unwrap();
        let response = handler.handle(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_bad_parameter_is_400_without_network() {
        // The upstream address is unroutable, so a reply proves the
        // request was rejected before any forwarding happened.
        let handler = handler_for("http://127.0.0.1:1");

        let response = handler.handle(get("/deputados/abc")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_counter_returns_to_zero() {
        let count = Arc::new(AtomicUsize::new(0));
        let handler = RequestHandler::new(
            Arc::new(Router::new().unwrap()),
            Arc::new(UpstreamClient::new("http://127.0.0.1:1", None).unwrap()),
            Arc::clone(&count),
        );

        let _ = handler.handle(get("/nope")).await.unwrap();
        assert_eq!(count.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_counter_recovers_when_request_is_aborted_mid_flight() {
        // A listener that never accepts keeps the upstream call pending
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let count = Arc::new(AtomicUsize::new(0));
        let handler = RequestHandler::new(
            Arc::new(Router::new().unwrap()),
            Arc::new(UpstreamClient::new(&format!("http://{addr}"), None).unwrap()),
            Arc::clone(&count),
        );

        let pending = tokio::spawn(async move { handler.handle(get("/deputados")).await });

        while count.load(Ordering::Relaxed) == 0 {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        // Dropping the future at the await point must release the slot
        pending.abort();
        let _ = pending.await;

        assert_eq!(count.load(Ordering::Relaxed), 0);
    }
}
