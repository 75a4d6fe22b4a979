//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor with automatic validation.
///
/// Unlike `axum::Json` it does not insist on a `content-type` header, and an
/// empty body is read as `{}` so that missing fields surface as validation
/// failures instead of parse failures. Broken JSON is rejected as
/// [`AppError::BadRequest`], constraint violations as [`AppError::Validation`].
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateTag {
///     #[validate(length(min = 1))]
///     label: String,
/// }
///
/// async fn create_tag(ValidatedJson(payload): ValidatedJson<CreateTag>) -> String {
///     format!("Creating tag: {}", payload.label)
/// }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let data = parse_body::<T>(&bytes)?;
        data.validate()?;

        Ok(ValidatedJson(data))
    }
}

pub(crate) fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let parsed = if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"{}")
    } else {
        serde_json::from_slice(bytes)
    };

    parsed.map_err(|e| AppError::BadRequest(format!("Invalid JSON payload: {}", e)))
}
