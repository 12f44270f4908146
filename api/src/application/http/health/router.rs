use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_health::{__path_get_health, get_health};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_health))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health"), get(get_health))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::application::http::test::{TestApp, chat_config};

    #[tokio::test]
    async fn test_offline_health() {
        let app = TestApp::offline().await;

        let response = app.server.get("/health").await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({
                "status": "ok",
                "remoteVision": false,
                "modelReady": false,
                "recipes": false,
                "chat": false,
                "detectionBusy": false
            })
        );
    }

    #[tokio::test]
    async fn test_health_reports_configured_chat() {
        let app = TestApp::with_config(|config| {
            config.chat = Some(chat_config("http://127.0.0.1:9/chat".to_string()))
        })
        .await;

        let body: Value = app.server.get("/health").await.json();

        assert_eq!(body["chat"], true);
        assert_eq!(body["recipes"], false);
    }
}
