use axum::{Router, extract::DefaultBodyLimit, routing::post};
use nutrilens_core::domain::capture::services::MAX_IMAGE_SIZE;
use utoipa::OpenApi;

use super::handlers::detect_food::{__path_detect_food, detect_food};
use crate::application::http::server::app_state::AppState;

/// Room for multipart framing around the largest accepted image.
const BODY_LIMIT: usize = MAX_IMAGE_SIZE + 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(detect_food))]
pub struct DetectionApiDoc;

pub fn detection_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/detect", state.args.server.root_path),
            post(detect_food),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use serde_json::Value;

    use crate::application::http::test::{TestApp, jpeg};

    fn upload(bytes: Vec<u8>, mime: &str) -> MultipartForm {
        MultipartForm::new().add_part(
            "image",
            Part::bytes(bytes).file_name("meal.jpg").mime_type(mime),
        )
    }

    #[tokio::test]
    async fn test_detect_returns_local_result_offline() {
        let app = TestApp::offline().await;

        let response = app
            .server
            .post("/detect")
            .multipart(upload(jpeg([40, 180, 40]), "image/jpeg"))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["primaryFood"]["name"], "broccoli");
        assert_eq!(body["data"]["source"], "heuristic");
        assert_eq!(body["data"]["foods"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_detect_rejects_non_images() {
        let app = TestApp::offline().await;

        let response = app
            .server
            .post("/detect")
            .multipart(upload(b"hello".to_vec(), "text/plain"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_detect_requires_image_field() {
        let app = TestApp::offline().await;

        let response = app
            .server
            .post("/detect")
            .multipart(MultipartForm::new().add_text("note", "no image"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_detect_while_busy_is_conflict() {
        let app = TestApp::offline().await;
        let _guard = app.state.service.detection_session.try_begin().unwrap();

        let response = app
            .server
            .post("/detect")
            .multipart(upload(jpeg([40, 180, 40]), "image/jpeg"))
            .await;

        response.assert_status(StatusCode::CONFLICT);
    }
}
