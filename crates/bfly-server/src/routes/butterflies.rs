use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use bfly_types::{sort_by_rating_desc, Butterfly, ButterflyInput, Rating};
use serde_json::Value;
use tracing::info;

use super::{created, fresh_id, json_body};
use crate::context::Db;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/butterflies", get(list_butterflies).post(create_butterfly))
        .route("/butterflies/:id", get(get_butterfly))
        .route("/butterflies/:id/ratings", get(list_butterfly_ratings))
}

pub async fn list_butterflies(Db(store): Db) -> Json<Vec<Butterfly>> {
    Json(store.get().await)
}

pub async fn get_butterfly(Db(store): Db, Path(id): Path<String>) -> ApiResult<Json<Butterfly>> {
    store
        .find_by_id::<Butterfly>(&id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_butterfly(
    State(state): State<AppState>,
    Db(store): Db,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Response> {
    let input = ButterflyInput::validate(json_body(body)?).map_err(ApiError::InvalidBody)?;
    let id = fresh_id::<Butterfly>(&store, state.ids.as_ref()).await;
    let butterfly = store.push(input.into_record(id)).await?;
    info!(id = %butterfly.id, "butterfly created");
    Ok(created(format!("/butterflies/{}", butterfly.id), butterfly))
}

/// Ratings of one butterfly, highest first.
pub async fn list_butterfly_ratings(
    Db(store): Db,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Rating>>> {
    if !store.contains::<Butterfly>(&id).await {
        return Err(ApiError::NotFound);
    }
    let mut ratings = store.filter::<Rating, _>(|r| r.butterfly_id == id).await;
    sort_by_rating_desc(&mut ratings);
    Ok(Json(ratings))
}
