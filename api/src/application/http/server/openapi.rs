use utoipa::OpenApi;

use crate::application::http::{
    chat::router::ChatApiDoc,
    detection::router::DetectionApiDoc,
    health::router::HealthApiDoc,
    inventory::router::InventoryApiDoc,
    nutrition::router::{FoodsApiDoc, NutrientsApiDoc},
    recipe::router::RecipeApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriLens API"
    ),
    nest(
        (path = "/detect", api = DetectionApiDoc),
        (path = "/inventory", api = InventoryApiDoc),
        (path = "/nutrients", api = NutrientsApiDoc),
        (path = "/foods", api = FoodsApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/chat", api = ChatApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
