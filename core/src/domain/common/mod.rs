use std::{path::PathBuf, time::Duration};

use chrono::{DateTime, Utc};

pub mod entities;

#[derive(Clone, Debug)]
pub struct NutrilensConfig {
    pub vision: Option<VisionConfig>,
    pub model: Option<ModelConfig>,
    pub detection: DetectionConfig,
    pub recipe: Option<RecipeConfig>,
    pub chat: Option<ChatConfig>,
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
}

/// Remote multimodal endpoint used by the vision pipeline.
#[derive(Clone, Debug)]
pub struct VisionConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

/// Model server hosting the general-purpose image classifier.
#[derive(Clone, Debug)]
pub struct ModelConfig {
    pub base_url: String,
    pub model_name: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct DetectionConfig {
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            retry_delay: Duration::from_secs(1),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RecipeConfig {
    pub base_url: String,
    pub app_id: String,
    pub app_key: String,
}

#[derive(Clone, Debug)]
pub struct ChatConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub categories_url: String,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

/// Current time plus its unix timestamp in milliseconds.
pub fn generate_timestamp() -> (DateTime<Utc>, i64) {
    let now = Utc::now();
    let millis = now.timestamp_millis();

    (now, millis)
}
