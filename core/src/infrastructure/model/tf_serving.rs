use image::imageops::{self, FilterType};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tokio::task;

use crate::domain::{
    capture::entities::Bitmap,
    common::ModelConfig,
    food_detection::{
        entities::DetectionError,
        ports::{ImageModel, ModelLoader},
    },
};

pub const INPUT_SIZE: u32 = 224;

type Tensor = Vec<Vec<[f32; 3]>>;

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<Tensor>,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Vec<f32>>,
}

#[derive(Debug, Deserialize)]
struct ModelStatusResponse {
    #[serde(default)]
    model_version_status: Vec<VersionStatus>,
}

#[derive(Debug, Deserialize)]
struct VersionStatus {
    #[serde(default)]
    version: String,
    state: String,
}

/// Resizes to the model input and scales each channel to [-1, 1].
pub fn preprocess(bitmap: &Bitmap) -> Result<Tensor, DetectionError> {
    let image = bitmap
        .to_rgba_image()
        .map_err(|e| DetectionError::Encoding(e.to_string()))?;
    let resized = imageops::resize(&image, INPUT_SIZE, INPUT_SIZE, FilterType::Triangle);

    let normalize = |v: u8| (f32::from(v) - 127.5) / 127.5;
    Ok(resized
        .rows()
        .map(|row| {
            row.map(|pixel| [normalize(pixel[0]), normalize(pixel[1]), normalize(pixel[2])])
                .collect()
        })
        .collect())
}

fn request_error(e: reqwest::Error) -> DetectionError {
    if e.is_timeout() {
        DetectionError::Timeout
    } else {
        DetectionError::Request(e.to_string())
    }
}

async fn check_status(response: Response) -> Result<Response, DetectionError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(DetectionError::Status { status, body })
}

/// Checks that the model is served before handing out a [`TfServingModel`].
#[derive(Debug, Clone)]
pub struct TfServingLoader {
    base_url: String,
    model_name: String,
    client: Client,
}

impl TfServingLoader {
    pub fn new(config: &ModelConfig) -> Result<Self, DetectionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DetectionError::ModelUnavailable(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model_name: config.model_name.clone(),
            client,
        })
    }

    fn model_url(&self) -> String {
        format!("{}/v1/models/{}", self.base_url, self.model_name)
    }
}

impl ModelLoader for TfServingLoader {
    type Model = TfServingModel;

    async fn load(&self) -> Result<TfServingModel, DetectionError> {
        let response = self
            .client
            .get(self.model_url())
            .send()
            .await
            .map_err(request_error)?;
        let status: ModelStatusResponse = check_status(response)
            .await?
            .json()
            .await
            .map_err(request_error)?;

        let available = status
            .model_version_status
            .iter()
            .find(|v| v.state.eq_ignore_ascii_case("AVAILABLE"))
            .ok_or_else(|| {
                DetectionError::ModelUnavailable(format!("{} is not available", self.model_name))
            })?;

        tracing::info!(model = %self.model_name, version = %available.version, "Model server ready");
        Ok(TfServingModel {
            predict_url: format!("{}:predict", self.model_url()),
            client: self.client.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct TfServingModel {
    predict_url: String,
    client: Client,
}

impl ImageModel for TfServingModel {
    async fn predict(&self, bitmap: &Bitmap) -> Result<Vec<f32>, DetectionError> {
        let bitmap = bitmap.clone();
        let tensor = task::spawn_blocking(move || preprocess(&bitmap))
            .await
            .map_err(|e| DetectionError::Encoding(e.to_string()))??;
        let request = PredictRequest {
            instances: vec![tensor],
        };

        let response = self
            .client
            .post(&self.predict_url)
            .json(&request)
            .send()
            .await
            .map_err(request_error)?;
        let body: PredictResponse = check_status(response)
            .await?
            .json()
            .await
            .map_err(request_error)?;

        body.predictions
            .into_iter()
            .next()
            .ok_or_else(|| DetectionError::ModelUnavailable("empty predictions".to_string()))
    }
}
