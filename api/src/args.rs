use std::{path::PathBuf, time::Duration};

use clap::{Args as ClapArgs, Parser};
use nutrilens_core::domain::common::{
    CatalogConfig, ChatConfig, DetectionConfig, ModelConfig, NutrilensConfig, RecipeConfig,
    StorageConfig, VisionConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrilens-api", version, about = "Food recognition and nutrition API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub vision: VisionArgs,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub detection: DetectionArgs,

    #[command(flatten)]
    pub recipe: RecipeArgs,

    #[command(flatten)]
    pub chat: ChatArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub storage: StorageArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct VisionArgs {
    #[arg(long, env = "VISION_API_ENDPOINT")]
    pub vision_endpoint: Option<String>,

    #[arg(long, env = "VISION_API_KEY", hide_env_values = true)]
    pub vision_api_key: Option<String>,

    #[arg(long, env = "VISION_TIMEOUT_SECS", default_value_t = 30)]
    pub vision_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ModelArgs {
    /// Base URL of a TensorFlow Serving compatible model server.
    #[arg(long, env = "MODEL_SERVER_URL")]
    pub model_server_url: Option<String>,

    #[arg(long, env = "MODEL_NAME", default_value = "mobilenet_v2")]
    pub model_name: String,

    #[arg(long, env = "MODEL_TIMEOUT_SECS", default_value_t = 10)]
    pub model_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DetectionArgs {
    #[arg(long, env = "DETECTION_MAX_ATTEMPTS", default_value_t = 2)]
    pub max_attempts: u32,

    #[arg(long, env = "DETECTION_RETRY_DELAY_MS", default_value_t = 1000)]
    pub retry_delay_ms: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct RecipeArgs {
    #[arg(long, env = "EDAMAM_BASE_URL", default_value = "https://api.edamam.com")]
    pub recipe_base_url: String,

    #[arg(long, env = "EDAMAM_APP_ID")]
    pub recipe_app_id: Option<String>,

    #[arg(long, env = "EDAMAM_APP_KEY", hide_env_values = true)]
    pub recipe_app_key: Option<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ChatArgs {
    #[arg(long, env = "CHAT_API_ENDPOINT")]
    pub chat_endpoint: Option<String>,

    #[arg(long, env = "CHAT_API_KEY", hide_env_values = true)]
    pub chat_api_key: Option<String>,

    #[arg(long, env = "CHAT_TIMEOUT_SECS", default_value_t = 30)]
    pub chat_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct CatalogArgs {
    #[arg(
        long,
        env = "FOOD_CATEGORIES_URL",
        default_value = "https://world.openfoodfacts.org/api/v0/product_categories.json"
    )]
    pub categories_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    #[arg(long, env = "DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,
}

impl From<Args> for NutrilensConfig {
    fn from(args: Args) -> Self {
        let vision = args
            .vision
            .vision_endpoint
            .zip(args.vision.vision_api_key)
            .map(|(endpoint, api_key)| VisionConfig {
                endpoint,
                api_key,
                timeout: Duration::from_secs(args.vision.vision_timeout_secs),
            });

        let model = args.model.model_server_url.map(|base_url| ModelConfig {
            base_url,
            model_name: args.model.model_name,
            timeout: Duration::from_secs(args.model.model_timeout_secs),
        });

        let recipe = args
            .recipe
            .recipe_app_id
            .zip(args.recipe.recipe_app_key)
            .map(|(app_id, app_key)| RecipeConfig {
                base_url: args.recipe.recipe_base_url,
                app_id,
                app_key,
            });

        let chat = args
            .chat
            .chat_endpoint
            .zip(args.chat.chat_api_key)
            .map(|(endpoint, api_key)| ChatConfig {
                endpoint,
                api_key,
                timeout: Duration::from_secs(args.chat.chat_timeout_secs),
            });

        NutrilensConfig {
            vision,
            model,
            detection: DetectionConfig {
                max_attempts: args.detection.max_attempts,
                retry_delay: Duration::from_millis(args.detection.retry_delay_ms),
            },
            recipe,
            chat,
            catalog: CatalogConfig {
                categories_url: args.catalog.categories_url,
            },
            storage: StorageConfig {
                data_dir: args.storage.data_dir,
            },
        }
    }
}
