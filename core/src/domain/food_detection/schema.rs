use serde::Deserialize;

/// System prompt sent with every remote vision request.
pub const VISION_SYSTEM_PROMPT: &str = "You are a food recognition and nutrition analysis AI. \
Identify all food items and estimate their nutrition for typical serving sizes. \
Respond with this exact JSON format only: \
{\"foods\": [{\"name\": \"food name\", \"quantity\": \"estimated serving size\", \
\"calories\": number, \"protein\": number, \"carbs\": number, \"fat\": number, \
\"fiber\": number, \"sugar\": number, \"benefits\": [\"string\"], \
\"dietarySuitability\": [\"string\"]}]}";

/// Message content returned by the vision model.
#[derive(Debug, Deserialize)]
pub struct WireDetection {
    pub foods: Vec<WireFood>,
}

/// Numbers stay optional here so a missing value is reported per field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireFood {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub fiber: Option<f64>,
    #[serde(default)]
    pub sugar: Option<f64>,
    #[serde(default)]
    pub benefits: Option<Vec<String>>,
    #[serde(default)]
    pub dietary_suitability: Option<Vec<String>>,
}
