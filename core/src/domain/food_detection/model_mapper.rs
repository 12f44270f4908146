use std::ops::RangeInclusive;

use tokio::task;

use crate::domain::{
    capture::entities::Bitmap,
    food_detection::{
        entities::{DetectionError, DetectionSource, FoodDetectionResult},
        heuristic::ColorHeuristicClassifier,
        ports::{Classifier, ImageModel, ModelLoader},
        value_objects::{FoodLabel, LabelGuess},
    },
};

pub const TOP_K: usize = 5;

/// ImageNet class index ranges that correspond to foods we know about.
const FOOD_INDEX_RANGES: [(FoodLabel, RangeInclusive<usize>); 4] = [
    (FoodLabel::Apple, 948..=953),
    (FoodLabel::Banana, 954..=955),
    (FoodLabel::Broccoli, 924..=926),
    (FoodLabel::Carrot, 918..=920),
];

/// Non-finite model outputs count as zero.
fn finite_score(score: f32) -> f32 {
    if score.is_finite() { score } else { 0.0 }
}

/// Indices of the `k` highest scores, best first. Ties keep index order.
pub fn top_k_indices(scores: &[f32], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| finite_score(scores[b]).total_cmp(&finite_score(scores[a])));
    indices.truncate(k);
    indices
}

/// First ranked index that falls in a known food range.
pub fn map_to_food_label(ranked: &[usize], scores: &[f32]) -> Option<LabelGuess> {
    ranked.iter().find_map(|&index| {
        FOOD_INDEX_RANGES
            .iter()
            .find(|(_, range)| range.contains(&index))
            .map(|(label, _)| {
                let confidence = f64::from(finite_score(scores[index])).clamp(0.0, 1.0);
                LabelGuess::new(*label, confidence)
            })
    })
}

/// Terminal states of model initialization.
#[derive(Debug)]
pub enum ModelState<M> {
    Ready(M),
    Degraded,
}

impl<M: ImageModel> ModelState<M> {
    pub async fn initialize<L>(loader: &L) -> Self
    where
        L: ModelLoader<Model = M>,
    {
        match loader.load().await {
            Ok(model) => {
                tracing::info!("Food detection model initialized");
                ModelState::Ready(model)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error loading model, using fallback detection method");
                ModelState::Degraded
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelState::Ready(_))
    }
}

pub struct ModelBasedClassifier<M> {
    state: ModelState<M>,
    heuristic: ColorHeuristicClassifier,
}

impl<M: ImageModel> ModelBasedClassifier<M> {
    pub fn new(state: ModelState<M>) -> Self {
        Self {
            state,
            heuristic: ColorHeuristicClassifier::new(),
        }
    }

    pub fn degraded() -> Self {
        Self::new(ModelState::Degraded)
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Color scan on the blocking pool.
    async fn heuristic_guess(&self, bitmap: &Bitmap) -> (LabelGuess, DetectionSource) {
        let heuristic = self.heuristic;
        let bitmap = bitmap.clone();
        let guess = match task::spawn_blocking(move || heuristic.guess(&bitmap)).await {
            Ok(guess) => guess,
            Err(e) => {
                tracing::error!(error = %e, "Heuristic scan aborted");
                LabelGuess::new(FoodLabel::Unknown, 0.0)
            }
        };
        (guess, DetectionSource::Heuristic)
    }

    /// Mapped model label, or the color heuristic when nothing maps.
    pub async fn guess(&self, bitmap: &Bitmap) -> (LabelGuess, DetectionSource) {
        let ModelState::Ready(model) = &self.state else {
            return self.heuristic_guess(bitmap).await;
        };

        match model.predict(bitmap).await {
            Ok(scores) => {
                let ranked = top_k_indices(&scores, TOP_K);
                match map_to_food_label(&ranked, &scores) {
                    Some(guess) => (guess, DetectionSource::Model),
                    None => {
                        tracing::debug!(?ranked, "No food class in top predictions");
                        self.heuristic_guess(bitmap).await
                    }
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Error during classification");
                self.heuristic_guess(bitmap).await
            }
        }
    }
}

impl<M: ImageModel> Classifier for ModelBasedClassifier<M> {
    async fn classify(&self, bitmap: &Bitmap) -> Result<FoodDetectionResult, DetectionError> {
        let (guess, source) = self.guess(bitmap).await;
        Ok(FoodDetectionResult::from_label(
            guess.label.as_str(),
            guess.confidence,
            source,
        ))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) struct FixedScores(pub Vec<f32>);

    impl ImageModel for FixedScores {
        async fn predict(&self, _bitmap: &Bitmap) -> Result<Vec<f32>, DetectionError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenModel;

    impl ImageModel for BrokenModel {
        async fn predict(&self, _bitmap: &Bitmap) -> Result<Vec<f32>, DetectionError> {
            Err(DetectionError::ModelUnavailable("inference failed".to_string()))
        }
    }

    struct StaticLoader(Option<Vec<f32>>);

    impl ModelLoader for StaticLoader {
        type Model = FixedScores;

        async fn load(&self) -> Result<FixedScores, DetectionError> {
            self.0
                .clone()
                .map(FixedScores)
                .ok_or_else(|| DetectionError::ModelUnavailable("download failed".to_string()))
        }
    }

    pub(crate) fn scores_with(peaks: &[(usize, f32)]) -> Vec<f32> {
        let mut scores = vec![0.0; 1001];
        for &(index, score) in peaks {
            scores[index] = score;
        }
        scores
    }

    fn yellow() -> Bitmap {
        Bitmap::solid(10, 10, [220, 200, 60, 255]).unwrap()
    }

    #[test]
    fn test_top_k_orders_by_score() {
        let scores = [0.1, 0.9, 0.3, 0.9, 0.5, 0.0, 0.7];
        assert_eq!(top_k_indices(&scores, 5), vec![1, 3, 6, 4, 2]);
    }

    #[test]
    fn test_top_k_handles_short_inputs() {
        assert_eq!(top_k_indices(&[0.2, 0.4], 5), vec![1, 0]);
        assert!(top_k_indices(&[], 5).is_empty());
    }

    #[test]
    fn test_first_ranked_food_index_wins() {
        let scores = scores_with(&[(10, 0.6), (925, 0.2), (949, 0.1)]);
        let ranked = top_k_indices(&scores, TOP_K);
        let guess = map_to_food_label(&ranked, &scores).unwrap();
        assert_eq!(guess.label, FoodLabel::Broccoli);
        assert!((guess.confidence - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_unmapped_indices_return_none() {
        let scores = scores_with(&[(1, 0.5), (2, 0.4)]);
        let ranked = top_k_indices(&scores, TOP_K);
        assert_eq!(map_to_food_label(&ranked, &scores), None);
    }

    #[test]
    fn test_non_finite_scores_rank_as_zero() {
        let mut scores = scores_with(&[(950, 0.6)]);
        scores[0] = f32::NAN;
        scores[1] = f32::INFINITY;
        scores[919] = f32::NAN;

        let ranked = top_k_indices(&scores, TOP_K);
        assert_eq!(ranked[0], 950);

        let guess = map_to_food_label(&ranked, &scores).unwrap();
        assert_eq!(guess.label, FoodLabel::Apple);
        assert!((guess.confidence - 0.6).abs() < 1e-6);

        let nan_only = map_to_food_label(&[919], &scores).unwrap();
        assert_eq!(nan_only.label, FoodLabel::Carrot);
        assert_eq!(nan_only.confidence, 0.0);
    }

    #[tokio::test]
    async fn test_ready_model_maps_banana() {
        let classifier =
            ModelBasedClassifier::new(ModelState::Ready(FixedScores(scores_with(&[(955, 0.8)]))));
        let (guess, source) = classifier.guess(&yellow()).await;
        assert_eq!(guess.label, FoodLabel::Banana);
        assert_eq!(source, DetectionSource::Model);
    }

    #[tokio::test]
    async fn test_unmapped_prediction_delegates_to_heuristic() {
        let classifier =
            ModelBasedClassifier::new(ModelState::Ready(FixedScores(scores_with(&[(3, 0.9)]))));
        let (guess, source) = classifier.guess(&yellow()).await;
        assert_eq!(guess.label, FoodLabel::Banana);
        assert_eq!(source, DetectionSource::Heuristic);
    }

    #[tokio::test]
    async fn test_prediction_error_delegates_to_heuristic() {
        let classifier = ModelBasedClassifier::new(ModelState::Ready(BrokenModel));
        let result = classifier.classify(&yellow()).await.unwrap();
        assert_eq!(result.source(), DetectionSource::Heuristic);
        assert_eq!(result.primary_food().name, "banana");
    }

    #[tokio::test]
    async fn test_initialize_reaches_both_terminal_states() {
        let ready = ModelState::initialize(&StaticLoader(Some(vec![0.0]))).await;
        assert!(ready.is_ready());

        let degraded = ModelState::initialize(&StaticLoader(None)).await;
        assert!(!degraded.is_ready());
    }
}
