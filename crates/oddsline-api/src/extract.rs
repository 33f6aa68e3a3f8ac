// JSON extractor that validates request bodies before handlers run

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// Json extractor with validator-crate enforcement.
///
/// Deserialization failures (malformed JSON, bad deadline format,
/// unknown status label) and constraint failures (odds bounds) both
/// surface as a 422 with the detail body, before any persistence call.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;

        data.validate().map_err(|e| {
            let detail = e
                .field_errors()
                .iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |err| format!("{field}: {}", err.code))
                })
                .collect::<Vec<_>>()
                .join("; ");
            ApiError::Validation(detail)
        })?;

        Ok(ValidatedJson(data))
    }
}
