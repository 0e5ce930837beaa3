//! Request extractors whose rejections render as [`AppError`].

use axum::{
    Form,
    body::{Body, to_bytes},
    extract::{FromRequest, Request},
    http::{HeaderValue, header},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Largest body read when a request arrives without a `Content-Type`.
const MAX_UNTYPED_BODY: usize = 64 * 1024;

/// URL-encoded form body.
///
/// Wraps [`axum::Form`] so that malformed bodies, duplicate keys and wrong
/// content types produce the usual JSON 400 instead of a plain-text reply.
/// A request with no `Content-Type` and no body is read as an empty form.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormBody<T>(pub T);

impl<T, S> FromRequest<S> for FormBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            return Ok(Self(value));
        }

        let (mut parts, body) = req.into_parts();
        let bytes = to_bytes(body, MAX_UNTYPED_BODY)
            .await
            .map_err(|e| AppError::invalid_field("body", e.to_string()))?;

        if !bytes.is_empty() {
            let reason = format!("must be sent as {FORM_CONTENT_TYPE}");
            return Err(AppError::invalid_field("body", reason));
        }

        parts.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(FORM_CONTENT_TYPE),
        );
        let req = Request::from_parts(parts, Body::empty());
        let Form(value) = Form::<T>::from_request(req, state).await?;

        Ok(Self(value))
    }
}
