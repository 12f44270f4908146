use base64::{Engine, engine::general_purpose::STANDARD};
use tokio::task;
use tracing::instrument;

use crate::domain::{
    capture::entities::Bitmap,
    food_detection::{
        entities::{
            DetectionError, DetectionSource, FoodDetectionResult, FoodItem, ParseError,
            normalize_food_name,
        },
        ports::{Classifier, RemoteClassifier, VisionClient},
        schema::{VISION_SYSTEM_PROMPT, WireDetection, WireFood},
    },
};

/// Decodes the model's message content into a validated detection result.
pub fn decode_detection(content: &str) -> Result<FoodDetectionResult, DetectionError> {
    let wire: WireDetection =
        serde_json::from_str(content).map_err(|e| ParseError::InvalidJson(e.to_string()))?;

    let foods = wire
        .foods
        .into_iter()
        .enumerate()
        .map(|(index, food)| validate_food(index, food))
        .collect::<Result<Vec<_>, _>>()?;

    FoodDetectionResult::new(foods, DetectionSource::Remote)
}

fn validate_food(index: usize, food: WireFood) -> Result<FoodItem, ParseError> {
    let name = food
        .name
        .as_deref()
        .map(normalize_food_name)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| invalid(index, "name", "must not be blank"))?;

    Ok(FoodItem {
        name,
        quantity: food.quantity,
        calories: required(index, "calories", food.calories)?,
        protein: required(index, "protein", food.protein)?,
        carbs: required(index, "carbs", food.carbs)?,
        fat: required(index, "fat", food.fat)?,
        fiber: optional(index, "fiber", food.fiber)?,
        sugar: optional(index, "sugar", food.sugar)?,
        benefits: food.benefits,
        dietary_suitability: food.dietary_suitability,
    })
}

fn required(index: usize, field: &'static str, value: Option<f64>) -> Result<f64, ParseError> {
    let value = value.ok_or_else(|| invalid(index, field, "is missing"))?;
    check_amount(index, field, value)
}

fn optional(
    index: usize,
    field: &'static str,
    value: Option<f64>,
) -> Result<Option<f64>, ParseError> {
    value.map(|v| check_amount(index, field, v)).transpose()
}

fn check_amount(index: usize, field: &'static str, value: f64) -> Result<f64, ParseError> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(index, field, &format!("{value} is not a valid amount")));
    }
    Ok(value)
}

fn invalid(index: usize, field: &'static str, reason: &str) -> ParseError {
    ParseError::InvalidField {
        index,
        field,
        reason: reason.to_string(),
    }
}

pub fn jpeg_data_url(bitmap: &Bitmap) -> Result<String, DetectionError> {
    let jpeg = bitmap
        .encode_jpeg()
        .map_err(|e| DetectionError::Encoding(e.to_string()))?;
    Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(jpeg)))
}

/// Full foods list with nutrition from a hosted multimodal model.
pub struct RemoteVisionPipeline<V> {
    client: V,
}

impl<V: VisionClient> RemoteVisionPipeline<V> {
    pub fn new(client: V) -> Self {
        Self { client }
    }
}

impl<V: VisionClient> RemoteClassifier for RemoteVisionPipeline<V> {
    /// The JPEG data URL sent with every attempt.
    type Payload = String;

    #[instrument(skip(self, bitmap), fields(width = bitmap.width(), height = bitmap.height()))]
    async fn prepare(&self, bitmap: &Bitmap) -> Result<String, DetectionError> {
        let bitmap = bitmap.clone();
        task::spawn_blocking(move || jpeg_data_url(&bitmap))
            .await
            .map_err(|e| DetectionError::Encoding(e.to_string()))?
    }

    #[instrument(skip(self, image_url), fields(size = image_url.len()))]
    async fn classify_prepared(&self, image_url: &String) -> Result<FoodDetectionResult, DetectionError> {
        let content = self
            .client
            .complete_with_image(VISION_SYSTEM_PROMPT.to_string(), image_url.clone())
            .await?;

        let result = decode_detection(&content)?;
        tracing::info!(
            foods = result.foods().len(),
            primary = %result.primary_food().name,
            "Remote vision detection succeeded"
        );
        Ok(result)
    }
}

impl<V: VisionClient> Classifier for RemoteVisionPipeline<V> {
    async fn classify(&self, bitmap: &Bitmap) -> Result<FoodDetectionResult, DetectionError> {
        let image_url = self.prepare(bitmap).await?;
        self.classify_prepared(&image_url).await
    }
}
