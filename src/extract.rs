use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// `Json<T>` that also runs `validator` rules.
///
/// Shape and validation failures become a 422; failures to read the body keep
/// axum's own status.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match &rejection {
                JsonRejection::BytesRejection(_) => {
                    AppError::Request(rejection.status(), rejection.body_text())
                }
                _ => AppError::Validation(rejection.body_text()),
            })?;

        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
