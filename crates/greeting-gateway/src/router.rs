//! Gateway router - maps HTTP requests onto the greeting handler
//!
//! Requests are converted into SDK requests, handled, and the SDK response is
//! converted back. Unmatched paths and methods get axum's default 404 and 405.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::collections::HashMap;
use uuid::Uuid;

use greeting_sdk::request::parse_query;

/// Create the gateway router
pub fn create_gateway_router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/hello", get(handle_hello))
}

/// Health check endpoint for the gateway
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Handle `GET /api/hello`
async fn handle_hello(request: Request<Body>) -> Response {
    let sdk_request = to_sdk_request(&request);

    tracing::debug!(
        request_id = %sdk_request.request_id,
        method = %sdk_request.method,
        path = %sdk_request.path,
        "Incoming request"
    );

    into_http_response(greeting_sdk::greeting::handle(&sdk_request))
}

/// Build the SDK request from the incoming HTTP request
fn to_sdk_request(request: &Request<Body>) -> greeting_sdk::Request {
    let query = request.uri().query().map(parse_query).unwrap_or_default();

    let headers: HashMap<String, String> = request
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    greeting_sdk::Request {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        query,
        headers,
        request_id: Uuid::new_v4().to_string(),
    }
}

/// Convert an SDK response into an HTTP response
fn into_http_response(sdk_response: greeting_sdk::Response) -> Response {
    let mut builder = Response::builder()
        .status(StatusCode::from_u16(sdk_response.status).unwrap_or(StatusCode::OK));

    for (key, value) in &sdk_response.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }

    match builder.body(Body::from(sdk_response.body.unwrap_or_default())) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Failed to build response: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build response").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, Method};
    use greeting_sdk::GreetingResponse;
    use tower::ServiceExt;

    async fn send(method: Method, uri: &str) -> Response {
        create_gateway_router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    async fn greeting(uri: &str) -> GreetingResponse {
        let response = send(Method::GET, uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_hello_default() {
        assert_eq!(greeting("/api/hello").await.message, "Hello, world!");
    }

    #[tokio::test]
    async fn test_hello_with_name() {
        assert_eq!(greeting("/api/hello?name=Muni").await.message, "Hello, Muni!");
    }

    #[tokio::test]
    async fn test_hello_with_empty_name() {
        assert_eq!(greeting("/api/hello?name=").await.message, "Hello, !");
    }

    #[tokio::test]
    async fn test_hello_decodes_name() {
        assert_eq!(
            greeting("/api/hello?name=Ada+Lovelace").await.message,
            "Hello, Ada Lovelace!"
        );
        assert_eq!(
            greeting("/api/hello?name=a&name=b").await.message,
            "Hello, a,b!"
        );
    }

    #[tokio::test]
    async fn test_hello_escapes_json() {
        let response = send(Method::GET, "/api/hello?name=%22quoted%22").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            r#"{"message":"Hello, \"quoted\"!"}"#
        );
    }

    #[tokio::test]
    async fn test_hello_head() {
        let response = send(Method::HEAD, "/api/hello").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_hello_wrong_method() {
        let response = send(Method::POST, "/api/hello").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(response.headers().contains_key(header::ALLOW));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = send(Method::GET, "/api/goodbye").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = send(Method::GET, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "OK");
    }

    #[test]
    fn test_sdk_request_carries_query_and_headers() {
        let request = Request::builder()
            .uri("/api/hello?name=Muni")
            .header("X-Trace", "abc")
            .body(Body::empty())
            .unwrap();

        let sdk_request = to_sdk_request(&request);
        assert_eq!(sdk_request.method, "GET");
        assert_eq!(sdk_request.path, "/api/hello");
        assert_eq!(sdk_request.query_param("name").map(String::as_str), Some("Muni"));
        assert_eq!(sdk_request.header("x-trace").map(String::as_str), Some("abc"));
        assert!(Uuid::parse_str(&sdk_request.request_id).is_ok());
    }

    #[test]
    fn test_invalid_sdk_header_is_500() {
        let sdk_response = greeting_sdk::Response::new(200).with_header("bad header", "x");
        let response = into_http_response(sdk_response);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_sdk_status_falls_back_to_ok() {
        let response = into_http_response(greeting_sdk::Response::new(42));
        assert_eq!(response.status(), StatusCode::OK);
    }
}
