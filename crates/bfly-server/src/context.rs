//! Attaching the datastore to each request and getting it back out.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::Extensions;
use axum::middleware::Next;
use axum::response::Response;
use bfly_store::{DocumentStore, StoreError, StoreResult};

use crate::error::ApiError;
use crate::state::AppState;

/// Middleware: open the store (first request only) and attach it to the
/// request's extensions.
pub async fn attach_store(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let store = state.store.initialize().await?;
    request.extensions_mut().insert(store);
    Ok(next.run(request).await)
}

/// The store attached by [`attach_store`].
///
/// Fails with [`StoreError::Unavailable`] when the middleware did not run,
/// which is a wiring mistake rather than a client error.
pub fn retrieve_store(extensions: &Extensions) -> StoreResult<Arc<DocumentStore>> {
    extensions
        .get::<Arc<DocumentStore>>()
        .cloned()
        .ok_or(StoreError::Unavailable)
}

/// Extractor for the request's datastore handle.
pub struct Db(pub Arc<DocumentStore>);

#[async_trait]
impl<S> FromRequestParts<S> for Db
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(retrieve_store(&parts.extensions)?))
    }
}
