use std::fmt;

use crate::domain::food_detection::entities::FoodDetectionResult;

/// Labels the local classifiers can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodLabel {
    Apple,
    Banana,
    Broccoli,
    Carrot,
    Chicken,
    Rice,
    Pasta,
    Salmon,
    Avocado,
    Eggs,
    Unknown,
}

impl FoodLabel {
    pub const ALL: [FoodLabel; 11] = [
        FoodLabel::Apple,
        FoodLabel::Banana,
        FoodLabel::Broccoli,
        FoodLabel::Carrot,
        FoodLabel::Chicken,
        FoodLabel::Rice,
        FoodLabel::Pasta,
        FoodLabel::Salmon,
        FoodLabel::Avocado,
        FoodLabel::Eggs,
        FoodLabel::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodLabel::Apple => "apple",
            FoodLabel::Banana => "banana",
            FoodLabel::Broccoli => "broccoli",
            FoodLabel::Carrot => "carrot",
            FoodLabel::Chicken => "chicken",
            FoodLabel::Rice => "rice",
            FoodLabel::Pasta => "pasta",
            FoodLabel::Salmon => "salmon",
            FoodLabel::Avocado => "avocado",
            FoodLabel::Eggs => "eggs",
            FoodLabel::Unknown => "unknown food",
        }
    }
}

impl fmt::Display for FoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-effort single label from a local classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelGuess {
    pub label: FoodLabel,
    pub confidence: f64,
}

impl LabelGuess {
    pub fn new(label: FoodLabel, confidence: f64) -> Self {
        Self { label, confidence }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetectionOutcome {
    Completed(FoodDetectionResult),
    /// The caller went away; the result must not be applied.
    Cancelled,
}

impl DetectionOutcome {
    pub fn completed(self) -> Option<FoodDetectionResult> {
        match self {
            DetectionOutcome::Completed(result) => Some(result),
            DetectionOutcome::Cancelled => None,
        }
    }
}
