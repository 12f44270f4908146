use std::future::Future;

use crate::domain::{chat::entities::ChatRequest, common::entities::app_errors::CoreError};

pub trait ChatClient: Send + Sync {
    /// Content of the first choice, `None` when the reply carried none.
    fn complete(
        &self,
        request: ChatRequest,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}
