use std::future::Future;

use crate::domain::{
    capture::entities::Bitmap,
    food_detection::entities::{DetectionError, FoodDetectionResult},
};

/// A strategy turning a bitmap into detected foods.
pub trait Classifier: Send + Sync {
    fn classify(
        &self,
        bitmap: &Bitmap,
    ) -> impl Future<Output = Result<FoodDetectionResult, DetectionError>> + Send;
}

/// A remote detector whose request body is built once and reused across attempts.
pub trait RemoteClassifier: Send + Sync {
    type Payload: Send + Sync;

    fn prepare(
        &self,
        bitmap: &Bitmap,
    ) -> impl Future<Output = Result<Self::Payload, DetectionError>> + Send;

    fn classify_prepared(
        &self,
        payload: &Self::Payload,
    ) -> impl Future<Output = Result<FoodDetectionResult, DetectionError>> + Send;
}

/// Client for a multimodal chat-completion endpoint
pub trait VisionClient: Send + Sync {
    /// Sends the system prompt and image, returning the raw message content.
    fn complete_with_image(
        &self,
        system_prompt: String,
        image_data_url: String,
    ) -> impl Future<Output = Result<String, DetectionError>> + Send;
}

/// A loaded general-purpose image classifier.
pub trait ImageModel: Send + Sync {
    /// One score per class index.
    fn predict(&self, bitmap: &Bitmap) -> impl Future<Output = Result<Vec<f32>, DetectionError>> + Send;
}

pub trait ModelLoader: Send + Sync {
    type Model: ImageModel;

    fn load(&self) -> impl Future<Output = Result<Self::Model, DetectionError>> + Send;
}
