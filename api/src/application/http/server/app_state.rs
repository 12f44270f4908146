use std::sync::Arc;

use nutrilens_core::application::NutrilensService;
use tokio_util::sync::CancellationToken;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutrilensService,
    /// Cancelled on shutdown so in-flight detections stop retrying.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutrilensService) -> Self {
        Self {
            args,
            service,
            shutdown: CancellationToken::new(),
        }
    }
}
