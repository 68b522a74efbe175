pub mod health;
pub mod resumes;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/extract", post(resumes::handle_extract))
        .route("/api/v1/resumes/upload", post(resumes::handle_upload))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    const BOUNDARY: &str = "resume-api-test-boundary";

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(field: &str, content_type: &str, content: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"resume.txt\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {content}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-api");
    }

    #[tokio::test]
    async fn test_extract_returns_structured_record() {
        let text = "Jane Doe\njane@example.com\n\nSKILLS\nRust, Go";
        let (status, body) =
            send(json_request("/api/v1/resumes/extract", json!({ "raw_text": text }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["contact"]["email"], "jane@example.com");
        assert_eq!(body["skills"], json!(["Rust", "Go"]));
        assert_eq!(body["rawText"], text);
    }

    #[tokio::test]
    async fn test_extract_empty_text_is_not_an_error() {
        let (status, body) =
            send(json_request("/api/v1/resumes/extract", json!({ "raw_text": "" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rawText"], "");
        assert_eq!(body["experience"], json!([]));
        assert_eq!(body["contact"], json!({}));
    }

    #[tokio::test]
    async fn test_extract_missing_text_is_bad_request() {
        let (status, body) = send(json_request("/api/v1/resumes/extract", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) =
            send(json_request("/api/v1/resumes/extract", json!({ "raw_text": null }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_plain_text_document() {
        let content = "Jane Doe\n\nSKILLS\nRust, Go";
        let (status, body) = send(multipart_request("file", "text/plain", content)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pageCount"], 1);
        assert_eq!(body["wordCount"], 5);
        assert_eq!(body["data"]["skills"], json!(["Rust", "Go"]));
    }

    #[tokio::test]
    async fn test_upload_without_file_field() {
        let (status, body) = send(multipart_request("attachment", "text/plain", "hello")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_unsupported_type() {
        let (status, body) = send(multipart_request("file", "image/png", "not really")).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }
}
