//! API middleware

use std::convert::Infallible;

use axum::{
    async_trait,
    body::Body,
    extract::FromRequestParts,
    http::{request::Parts, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tower_http::request_id::{MakeRequestId, RequestId as HeaderRequestId};
use tracing::{info, warn};

use core_kernel::{OperationMetadata, RequestId};

/// Header carrying the request ID in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Issues `REQ-` prefixed request IDs for requests that arrive without one
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeStaffRequestId;

impl MakeRequestId for MakeStaffRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<HeaderRequestId> {
        HeaderValue::from_str(&RequestId::new().to_string())
            .ok()
            .map(HeaderRequestId::new)
    }
}

/// Store metadata for the current request
///
/// Carries the `x-request-id` header into [`OperationMetadata`] so store
/// spans log the same ID as the request log.
#[derive(Debug, Clone, Default)]
pub struct RequestMetadata(pub OperationMetadata);

#[async_trait]
impl<S> FromRequestParts<S> for RequestMetadata
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let metadata = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(OperationMetadata::with_correlation_id)
            .unwrap_or_default();
        Ok(Self(metadata))
    }
}

/// Request logging middleware
///
/// Logs every API request with its request ID, status and duration.
pub async fn request_log_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    if status.is_server_error() {
        warn!(
            method = %method,
            uri = %uri,
            request_id = %request_id,
            status = %status.as_u16(),
            duration_ms = duration.num_milliseconds(),
            "API request failed"
        );
    } else {
        info!(
            method = %method,
            uri = %uri,
            request_id = %request_id,
            status = %status.as_u16(),
            duration_ms = duration.num_milliseconds(),
            "API request"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn metadata_of(request: Request<()>) -> OperationMetadata {
        let (mut parts, _) = request.into_parts();
        RequestMetadata::from_request_parts(&mut parts, &())
            .await
            .unwrap()
            .0
    }

    #[tokio::test]
    async fn test_request_id_becomes_correlation_id() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "REQ-42")
            .body(())
            .unwrap();
        assert_eq!(
            metadata_of(request).await,
            OperationMetadata::with_correlation_id("REQ-42")
        );
    }

    #[tokio::test]
    async fn test_missing_request_id_leaves_metadata_empty() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(metadata_of(request).await, OperationMetadata::default());
    }

    #[test]
    fn test_generated_ids_are_prefixed() {
        let request = Request::builder().body(()).unwrap();
        let id = MakeStaffRequestId.make_request_id(&request).unwrap();
        assert!(id.header_value().to_str().unwrap().starts_with("REQ-"));
    }
}
