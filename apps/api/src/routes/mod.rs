pub mod form;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::ats::handlers::handle_ats_analyze;
use crate::interview::handlers::handle_generate_questions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let client_ui = ServeDir::new(&state.config.static_dir);
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/upload", post(handle_generate_questions))
        .route("/api/ats-analyze", post(handle_ats_analyze))
        // Path used by the first version of the client
        .route("/upload", post(handle_generate_questions))
        .fallback_service(client_ui)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
pub mod test_support {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::build_router;
    use crate::llm_client::ModelClient;
    use crate::state::{tests::test_config, AppState};

    const BOUNDARY: &str = "resumate-test-boundary";

    /// Router wired to a stub model and a private upload directory.
    pub struct TestApp {
        router: Router,
        upload_dir: TempDir,
    }

    impl TestApp {
        pub fn new(model: Arc<dyn ModelClient>) -> Self {
            let upload_dir = tempfile::tempdir().unwrap();
            let state = AppState::new(test_config(upload_dir.path().to_path_buf()), model);
            Self {
                router: build_router(state),
                upload_dir,
            }
        }

        pub fn router(&self) -> Router {
            self.router.clone()
        }

        pub fn upload_dir_is_empty(&self) -> bool {
            std::fs::read_dir(self.upload_dir.path())
                .unwrap()
                .next()
                .is_none()
        }
    }

    pub enum Part {
        Text {
            name: &'static str,
            value: &'static str,
        },
        File {
            name: &'static str,
            file_name: &'static str,
            content_type: &'static str,
            data: &'static str,
        },
    }

    impl Part {
        pub fn text(name: &'static str, value: &'static str) -> Self {
            Part::Text { name, value }
        }

        pub fn file(
            name: &'static str,
            file_name: &'static str,
            content_type: &'static str,
            data: &'static str,
        ) -> Self {
            Part::File {
                name,
                file_name,
                content_type,
                data,
            }
        }
    }

    fn encode(parts: &[Part]) -> String {
        let mut body = String::new();
        for part in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match part {
                Part::Text { name, value } => {
                    body.push_str(&format!(
                        "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                    ));
                }
                Part::File {
                    name,
                    file_name,
                    content_type,
                    data,
                } => {
                    body.push_str(&format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n{data}\r\n"
                    ));
                }
            }
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        body
    }

    /// Wraps `data` as the only file part, named `field`, of a multipart body.
    pub fn single_file_form(field: &str, data: &[u8]) -> Vec<u8> {
        let mut body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"cv.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    pub fn multipart_content_type() -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    /// Posts a multipart form and returns the status with the JSON body.
    pub async fn post_form(app: &TestApp, uri: &str, parts: &[Part]) -> (StatusCode, Value) {
        post_raw(app, uri, &multipart_content_type(), encode(parts).into_bytes()).await
    }

    /// Posts an arbitrary body. A non-JSON response body comes back as `Null`.
    pub async fn post_raw(
        app: &TestApp,
        uri: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();

        let response = app.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }
}
