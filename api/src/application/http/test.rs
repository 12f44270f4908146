use std::{sync::Arc, time::Duration};

use axum_test::TestServer;
use clap::Parser;
use nutrilens_core::{
    application::create_service,
    domain::{
        capture::Bitmap,
        common::{
            CatalogConfig, ChatConfig, DetectionConfig, NutrilensConfig, RecipeConfig,
            StorageConfig,
        },
    },
};
use tempfile::TempDir;

use crate::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    _data_dir: TempDir,
}

impl TestApp {
    /// No remote integrations; the catalogue URL refuses connections.
    pub async fn offline() -> Self {
        Self::with_config(|_| {}).await
    }

    pub async fn with_config(configure: impl FnOnce(&mut NutrilensConfig)) -> Self {
        let data_dir = TempDir::new().unwrap();
        let mut config = NutrilensConfig {
            vision: None,
            model: None,
            detection: DetectionConfig::default(),
            recipe: None,
            chat: None,
            catalog: CatalogConfig {
                categories_url: "http://127.0.0.1:9/categories.json".to_string(),
            },
            storage: StorageConfig {
                data_dir: data_dir.path().to_path_buf(),
            },
        };
        configure(&mut config);

        let args = Args::try_parse_from(["nutrilens-api", "--root-path", ""]).unwrap();
        let service = create_service(config).await.unwrap();
        let state = AppState::new(Arc::new(args), service);
        let server = TestServer::new(router(state.clone()).unwrap()).unwrap();

        Self {
            server,
            state,
            _data_dir: data_dir,
        }
    }
}

pub fn recipe_config(base_url: String) -> RecipeConfig {
    RecipeConfig {
        base_url,
        app_id: "test-app".to_string(),
        app_key: "test-key".to_string(),
    }
}

pub fn chat_config(endpoint: String) -> ChatConfig {
    ChatConfig {
        endpoint,
        api_key: "test-chat-key".to_string(),
        timeout: Duration::from_secs(5),
    }
}

/// Uniformly coloured JPEG upload.
pub fn jpeg(rgb: [u8; 3]) -> Vec<u8> {
    Bitmap::solid(32, 32, [rgb[0], rgb[1], rgb[2], 255])
        .unwrap()
        .encode_jpeg()
        .unwrap()
}
