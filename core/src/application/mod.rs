use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::{
    domain::{
        capture::services::{DetectionSession, decode_upload},
        chat::services::ChatService,
        common::{NutrilensConfig, entities::app_errors::CoreError},
        food_catalog::services::FoodCatalogCache,
        food_detection::{
            model_mapper::{ModelBasedClassifier, ModelState},
            remote::RemoteVisionPipeline,
            services::ClassificationOrchestrator,
            value_objects::DetectionOutcome,
        },
        inventory::services::InventoryService,
        recipe::services::RecipeService,
    },
    infrastructure::{
        food_catalog::open_food_facts::OpenFoodFactsSource,
        inventory::json_file_store::JsonFileInventoryStore,
        llm::openai_client::OpenAiCompatibleClient,
        model::tf_serving::{TfServingLoader, TfServingModel},
        recipe::edamam_client::EdamamRecipeClient,
    },
};

pub type DefaultOrchestrator =
    ClassificationOrchestrator<RemoteVisionPipeline<OpenAiCompatibleClient>, TfServingModel>;

/// Every service of the application, wired to its production adapters.
#[derive(Clone)]
pub struct NutrilensService {
    pub detection: Arc<DefaultOrchestrator>,
    pub detection_session: DetectionSession,
    pub inventory: Arc<InventoryService<JsonFileInventoryStore>>,
    pub catalog: Arc<FoodCatalogCache<OpenFoodFactsSource>>,
    pub recipes: Option<Arc<RecipeService<EdamamRecipeClient>>>,
    pub chat: Option<Arc<ChatService<OpenAiCompatibleClient>>>,
}

impl NutrilensService {
    /// Decodes an uploaded image and classifies it, one classification at a time.
    #[instrument(skip(self, data, cancel), fields(size = data.len()))]
    pub async fn detect_upload(
        &self,
        data: Vec<u8>,
        mime_type: &str,
        cancel: &CancellationToken,
    ) -> Result<DetectionOutcome, CoreError> {
        let bitmap = decode_upload(data, mime_type.to_string()).await?;
        let _busy = self.detection_session.try_begin()?;

        Ok(self.detection.detect_with_cancel(&bitmap, cancel).await)
    }
}

async fn load_model(config: &NutrilensConfig) -> ModelState<TfServingModel> {
    let Some(model) = &config.model else {
        tracing::info!("No model server configured, local detection uses color analysis");
        return ModelState::Degraded;
    };

    match TfServingLoader::new(model) {
        Ok(loader) => ModelState::initialize(&loader).await,
        Err(e) => {
            tracing::warn!(error = %e, "Could not create model client");
            ModelState::Degraded
        }
    }
}

pub async fn create_service(config: NutrilensConfig) -> Result<NutrilensService, CoreError> {
    let remote = config
        .vision
        .as_ref()
        .map(|vision| OpenAiCompatibleClient::for_vision(vision).map(RemoteVisionPipeline::new))
        .transpose()?;
    if remote.is_none() {
        tracing::warn!("No vision API configured, detection runs locally only");
    }

    let local = ModelBasedClassifier::new(load_model(&config).await);
    let detection =
        ClassificationOrchestrator::new(remote, local, config.detection.clone());

    let recipes = config
        .recipe
        .as_ref()
        .map(|recipe| Arc::new(RecipeService::new(EdamamRecipeClient::new(recipe))));

    let chat = config
        .chat
        .as_ref()
        .map(|chat| OpenAiCompatibleClient::for_chat(chat).map(|c| Arc::new(ChatService::new(c))))
        .transpose()?;

    Ok(NutrilensService {
        detection: Arc::new(detection),
        detection_session: DetectionSession::new(),
        inventory: Arc::new(InventoryService::new(JsonFileInventoryStore::in_dir(
            &config.storage.data_dir,
        ))),
        catalog: Arc::new(FoodCatalogCache::new(OpenFoodFactsSource::new(&config.catalog))),
        recipes,
        chat,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, RgbaImage};
    use tempfile::TempDir;

    use super::*;
    use crate::domain::{
        common::{CatalogConfig, DetectionConfig, StorageConfig},
        food_detection::entities::DetectionSource,
    };

    fn offline_config(dir: &TempDir) -> NutrilensConfig {
        NutrilensConfig {
            vision: None,
            model: None,
            detection: DetectionConfig::default(),
            recipe: None,
            chat: None,
            catalog: CatalogConfig {
                categories_url: "http://127.0.0.1:9/categories.json".to_string(),
            },
            storage: StorageConfig {
                data_dir: dir.path().to_path_buf(),
            },
        }
    }

    fn png(rgb: [u8; 3]) -> Vec<u8> {
        let image = RgbaImage::from_pixel(50, 50, image::Rgba([rgb[0], rgb[1], rgb[2], 255]));
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[tokio::test]
    async fn test_offline_service_detects_locally() {
        let dir = TempDir::new().unwrap();
        let service = create_service(offline_config(&dir)).await.unwrap();
        assert!(!service.detection.has_remote());
        assert!(!service.detection.model_ready());

        let outcome = service
            .detect_upload(png([220, 200, 60]), "image/png", &CancellationToken::new())
            .await
            .unwrap();
        let result = outcome.completed().unwrap();
        assert_eq!(result.source(), DetectionSource::Heuristic);
        assert_eq!(result.primary_food().name, "banana");
        assert!(!service.detection_session.is_busy());
    }

    #[tokio::test]
    async fn test_busy_session_rejects_second_detection() {
        let dir = TempDir::new().unwrap();
        let service = create_service(offline_config(&dir)).await.unwrap();
        let _guard = service.detection_session.try_begin().unwrap();

        let result = service
            .detect_upload(png([10, 10, 10]), "image/png", &CancellationToken::new())
            .await;
        assert!(matches!(result, Err(CoreError::Busy)));
    }

    #[tokio::test]
    async fn test_rejects_non_image_upload() {
        let dir = TempDir::new().unwrap();
        let service = create_service(offline_config(&dir)).await.unwrap();

        let result = service
            .detect_upload(b"%PDF-1.7".to_vec(), "application/pdf", &CancellationToken::new())
            .await;
        assert!(matches!(result, Err(CoreError::Capture(_))));
    }

    #[tokio::test]
    async fn test_unreachable_catalogue_falls_back() {
        let dir = TempDir::new().unwrap();
        let service = create_service(offline_config(&dir)).await.unwrap();

        let results = service.catalog.search("ta").await;
        let names: Vec<&str> = results.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["pasta", "potato"]);
    }
}
