use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    add_detection_to_inventory::{__path_add_detection_to_inventory, add_detection_to_inventory},
    add_inventory_item::{__path_add_inventory_item, add_inventory_item},
    list_inventory::{__path_list_inventory, list_inventory},
    remove_inventory_item::{__path_remove_inventory_item, remove_inventory_item},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    list_inventory,
    add_inventory_item,
    add_detection_to_inventory,
    remove_inventory_item
))]
pub struct InventoryApiDoc;

pub fn inventory_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/inventory"),
            get(list_inventory).post(add_inventory_item),
        )
        .route(
            &format!("{root_path}/inventory/detection"),
            post(add_detection_to_inventory),
        )
        .route(
            &format!("{root_path}/inventory/{{id}}"),
            delete(remove_inventory_item),
        )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::application::http::test::TestApp;

    #[tokio::test]
    async fn test_add_uses_nutrient_table_when_omitted() {
        let app = TestApp::offline().await;

        let response = app
            .server
            .post("/inventory")
            .json(&json!({"name": "Apple"}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["added"], true);
        assert_eq!(body["data"]["name"], "Apple");
        assert_eq!(body["data"]["nutrients"]["calories"], 52.0);
        assert!(body["data"]["dateAdded"].is_string());
    }

    #[tokio::test]
    async fn test_duplicate_names_are_not_added_twice() {
        let app = TestApp::offline().await;
        app.server
            .post("/inventory")
            .json(&json!({"name": "banana"}))
            .await
            .assert_status_ok();

        let response = app
            .server
            .post("/inventory")
            .json(&json!({"name": "  Banana "}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["added"], false);
        assert!(body.get("data").is_none());

        let list: Value = app.server.get("/inventory").await.json();
        assert_eq!(list["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_rejects_empty_name() {
        let app = TestApp::offline().await;

        let response = app
            .server
            .post("/inventory")
            .json(&json!({"name": ""}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_add_rejects_negative_nutrients() {
        let app = TestApp::offline().await;

        let response = app
            .server
            .post("/inventory")
            .json(&json!({
                "name": "mystery",
                "nutrients": {"calories": -500, "protein": 1, "carbs": 1, "fat": 1}
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let list: Value = app.server.get("/inventory").await.json();
        assert_eq!(list["data"], json!([]));
    }

    #[tokio::test]
    async fn test_add_keeps_supplied_nutrients() {
        let app = TestApp::offline().await;

        let body: Value = app
            .server
            .post("/inventory")
            .json(&json!({
                "name": "lentil soup",
                "nutrients": {"calories": 180, "protein": 12, "carbs": 30, "fat": 2, "dietarySuitability": ["Vegan"]}
            }))
            .await
            .json();

        assert_eq!(body["data"]["nutrients"]["calories"], 180.0);
        assert_eq!(body["data"]["nutrients"]["fiber"], 0.0);
        assert_eq!(body["data"]["nutrients"]["dietarySuitability"], json!(["Vegan"]));
    }

    #[tokio::test]
    async fn test_detected_food_is_added() {
        let app = TestApp::offline().await;
        let detection = json!({
            "foods": [],
            "primaryFood": {
                "name": "poke bowl",
                "calories": 540, "protein": 30, "carbs": 60, "fat": 18,
                "dietarySuitability": ["Gluten-Free"]
            },
            "source": "remote",
            "confidence": 0.9
        });

        let response = app.server.post("/inventory/detection").json(&detection).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["added"], true);
        assert_eq!(body["data"]["name"], "poke bowl");
        assert_eq!(body["data"]["nutrients"]["calories"], 540.0);
    }

    #[tokio::test]
    async fn test_local_detection_uses_nutrient_table() {
        let app = TestApp::offline().await;
        let detection = json!({
            "primaryFood": {"name": "carrot", "calories": 0, "protein": 0, "carbs": 0, "fat": 0},
            "source": "heuristic"
        });

        let body: Value = app
            .server
            .post("/inventory/detection")
            .json(&detection)
            .await
            .json();

        assert_eq!(body["data"]["nutrients"]["calories"], 41.0);
    }

    #[tokio::test]
    async fn test_detection_with_negative_amounts_is_rejected() {
        let app = TestApp::offline().await;
        let detection = json!({
            "primaryFood": {"name": "mystery", "calories": -1, "protein": 0, "carbs": 0, "fat": 0},
            "source": "remote"
        });

        app.server
            .post("/inventory/detection")
            .json(&detection)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_filters_by_search_and_diet() {
        let app = TestApp::offline().await;
        for name in ["apple", "chicken", "pineapple"] {
            app.server
                .post("/inventory")
                .json(&json!({"name": name}))
                .await
                .assert_status_ok();
        }

        let by_name: Value = app
            .server
            .get("/inventory")
            .add_query_param("search", "APPLE")
            .await
            .json();
        assert_eq!(by_name["data"].as_array().unwrap().len(), 2);

        let keto: Value = app
            .server
            .get("/inventory")
            .add_query_param("diet", "Keto")
            .await
            .json();
        let names: Vec<&str> = keto["data"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|item| item["name"].as_str())
            .collect();
        assert_eq!(names, vec!["chicken"]);

        let all: Value = app
            .server
            .get("/inventory")
            .add_query_param("diet", "all")
            .await
            .json();
        assert_eq!(all["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_remove_item() {
        let app = TestApp::offline().await;
        let added: Value = app
            .server
            .post("/inventory")
            .json(&json!({"name": "rice"}))
            .await
            .json();
        let id = added["data"]["id"].as_i64().unwrap();

        app.server
            .delete(&format!("/inventory/{id}"))
            .await
            .assert_status_ok();

        app.server
            .delete(&format!("/inventory/{id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
