use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nutrilens_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "E_CONFLICT"),
            ApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "E_SERVICE_UNAVAILABLE")
            }
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_BAD_GATEWAY"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        let message = error.to_string();
        match error {
            CoreError::Invalid | CoreError::Capture(_) => ApiError::BadRequest(message),
            CoreError::NotFound => ApiError::NotFound(message),
            CoreError::Busy => ApiError::Conflict(message),
            CoreError::ExternalServiceError(_) => ApiError::BadGateway(message),
            CoreError::Persistence(_) | CoreError::InternalServerError => {
                ApiError::InternalServerError(message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();
        if status.is_server_error() {
            tracing::error!(error = %self, %status, "Request failed");
        }

        let body = ApiErrorResponse {
            code: code.to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that also runs `validator` rules.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use nutrilens_core::domain::capture::CaptureError;

    use super::*;

    #[test]
    fn test_core_errors_map_to_statuses() {
        let cases = [
            (CoreError::Invalid, StatusCode::BAD_REQUEST),
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::Busy, StatusCode::CONFLICT),
            (
                CoreError::Capture(CaptureError::TooLarge { max: 10 }),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::ExternalServiceError("down".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).into_response().status(), status);
        }
    }
}
