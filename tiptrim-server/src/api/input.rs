//! RPC input extractor
//!
//! Procedure inputs arrive as a JSON body. An empty body reads as `{}`,
//! so procedures whose input is all optional may omit it. Malformed input
//! is reported as a structured `InvalidFormat` error rather than axum's
//! plain-text rejection.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};

#[derive(Debug, Clone)]
pub struct Input<T>(pub T);

impl<S, T> FromRequest<S> for Input<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::invalid_request(e.body_text()))?;
        let raw: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &body
        };
        serde_json::from_slice(raw)
            .map(Input)
            .map_err(|e| AppError::with_message(ErrorCode::InvalidFormat, format!("Invalid input: {e}")))
    }
}
