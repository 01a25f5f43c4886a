use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    response::{IntoResponse, Response},
};

use crate::{
    error::AppError,
    validation::{RequestInput, RuleSet},
};

/// A request shape with declared validation rules.
pub trait ValidatedInput: Sized {
    fn rules() -> RuleSet;

    /// Builds the typed input. Only called once `rules` reported no failures.
    fn from_input(input: &RequestInput) -> Option<Self>;
}

/// Extractor that runs `T::rules()` against the path parameters and JSON body.
///
/// Any failure rejects the request with 400 `{ "errors": [...] }` before the
/// handler runs.
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: ValidatedInput,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let params = Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
            .map(|Path(params)| params)
            .unwrap_or_default();

        let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(IntoResponse::into_response)?;
        let body = RequestInput::decode_body(&bytes).map_err(|err| {
            tracing::debug!(error = %err, "rejected malformed JSON body");
            AppError::BadRequest("Malformed JSON body".to_string()).into_response()
        })?;

        let input = RequestInput::new(params, body);
        let errors = T::rules().evaluate(&input);
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "request failed validation");
            return Err(AppError::Validation(errors).into_response());
        }

        T::from_input(&input).map(Validated).ok_or_else(|| {
            AppError::BadRequest("Malformed request".to_string()).into_response()
        })
    }
}
