//! Resource handlers.
//!
//! Each handler is a single read-validate-mutate-respond step against the
//! request's [`Db`](crate::context::Db).

pub mod butterflies;
pub mod ratings;
pub mod users;

use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use bfly_store::{Collection, DocumentStore};
use bfly_types::{IdGenerator, ValidationError};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Every endpoint, without the store middleware.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .merge(butterflies::routes())
        .merge(users::routes())
        .merge(ratings::routes())
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Server is running!" }))
}

/// Unwrap a JSON body, treating an unparseable one as an invalid payload.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::InvalidBody(ValidationError::Shape(rejection.body_text())))
}

/// `201 Created` with a `Location` header and the record as body.
fn created(location: String, record: impl Serialize) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(record)).into_response()
}

/// An id from `ids` not yet used in collection `R`.
async fn fresh_id<R: Collection>(store: &DocumentStore, ids: &dyn IdGenerator) -> String {
    loop {
        let id = ids.generate();
        if !store.contains::<R>(&id).await {
            return id;
        }
        debug!(%id, collection = R::NAME, "generated id already taken");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestApp;
    use bfly_types::{Butterfly, SequenceIdGenerator};

    #[tokio::test]
    async fn root_reports_running() {
        let app = TestApp::new();
        let res = app.get("/").await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body, json!({ "message": "Server is running!" }));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = TestApp::new();
        assert_eq!(app.get("/moths").await.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn fresh_id_skips_taken_ids() {
        let app = TestApp::new();
        let ids = SequenceIdGenerator::new(["wxyz9876", "qwertyuio", "brand-new"]);
        let id = fresh_id::<Butterfly>(&app.store, &ids).await;
        assert_eq!(id, "brand-new");
    }

    #[tokio::test]
    async fn fresh_id_is_per_collection() {
        let app = TestApp::new();
        // A user id may repeat a butterfly id.
        let ids = SequenceIdGenerator::new(["wxyz9876"]);
        let id = fresh_id::<bfly_types::User>(&app.store, &ids).await;
        assert_eq!(id, "wxyz9876");
    }
}
