use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::domain::{
    capture::entities::Bitmap,
    common::DetectionConfig,
    food_detection::{
        entities::FoodDetectionResult,
        model_mapper::ModelBasedClassifier,
        ports::{ImageModel, RemoteClassifier},
        value_objects::DetectionOutcome,
    },
};

enum RemotePhase {
    Succeeded(FoodDetectionResult),
    Exhausted,
    Cancelled,
}

/// Runs the remote pipeline with a bounded retry, then falls back to the
/// local classifiers. Always produces a non-empty result unless cancelled.
pub struct ClassificationOrchestrator<R, M> {
    remote: Option<R>,
    local: ModelBasedClassifier<M>,
    config: DetectionConfig,
}

impl<R, M> ClassificationOrchestrator<R, M>
where
    R: RemoteClassifier,
    M: ImageModel,
{
    pub fn new(remote: Option<R>, local: ModelBasedClassifier<M>, config: DetectionConfig) -> Self {
        Self {
            remote,
            local,
            config,
        }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn model_ready(&self) -> bool {
        self.local.is_ready()
    }

    pub async fn detect(&self, bitmap: &Bitmap) -> FoodDetectionResult {
        match self.remote_phase(bitmap, &CancellationToken::new()).await {
            RemotePhase::Succeeded(result) => result,
            RemotePhase::Exhausted | RemotePhase::Cancelled => self.local_phase(bitmap).await,
        }
    }

    #[instrument(skip(self, bitmap, cancel))]
    pub async fn detect_with_cancel(
        &self,
        bitmap: &Bitmap,
        cancel: &CancellationToken,
    ) -> DetectionOutcome {
        let result = match self.remote_phase(bitmap, cancel).await {
            RemotePhase::Succeeded(result) => result,
            RemotePhase::Cancelled => return DetectionOutcome::Cancelled,
            RemotePhase::Exhausted => self.local_phase(bitmap).await,
        };

        if cancel.is_cancelled() {
            tracing::info!("Detection cancelled, discarding result");
            return DetectionOutcome::Cancelled;
        }
        DetectionOutcome::Completed(result)
    }

    async fn remote_phase(&self, bitmap: &Bitmap, cancel: &CancellationToken) -> RemotePhase {
        let Some(remote) = &self.remote else {
            return RemotePhase::Exhausted;
        };
        let max_attempts = self.config.max_attempts;

        let prepared = tokio::select! {
            biased;
            _ = cancel.cancelled() => return RemotePhase::Cancelled,
            prepared = remote.prepare(bitmap) => prepared,
        };
        let payload = match prepared {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "Could not encode image for remote detection");
                return RemotePhase::Exhausted;
            }
        };

        for attempt in 1..=max_attempts {
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => return RemotePhase::Cancelled,
                outcome = remote.classify_prepared(&payload) => outcome,
            };

            match outcome {
                Ok(result) => return RemotePhase::Succeeded(result),
                Err(e) => {
                    tracing::warn!(attempt, max_attempts, error = %e, "Remote detection attempt failed");
                }
            }

            if attempt < max_attempts {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return RemotePhase::Cancelled,
                    _ = tokio::time::sleep(self.config.retry_delay) => {}
                }
            }
        }

        RemotePhase::Exhausted
    }

    async fn local_phase(&self, bitmap: &Bitmap) -> FoodDetectionResult {
        let (guess, source) = self.local.guess(bitmap).await;
        tracing::info!(
            label = %guess.label,
            confidence = guess.confidence,
            ?source,
            "Using local food detection"
        );
        FoodDetectionResult::from_label(guess.label.as_str(), guess.confidence, source)
    }
}
