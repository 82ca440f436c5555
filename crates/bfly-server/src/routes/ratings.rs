use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use bfly_types::{Butterfly, Rating, RatingInput, RatingUpdate, User};
use serde_json::Value;
use tracing::info;

use super::{created, fresh_id, json_body};
use crate::context::Db;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ratings", post(create_rating))
        .route(
            "/ratings/:id",
            get(get_rating).put(update_rating).delete(delete_rating),
        )
}

pub async fn get_rating(Db(store): Db, Path(id): Path<String>) -> ApiResult<Json<Rating>> {
    store
        .find_by_id::<Rating>(&id)
        .await
        .map(Json)
        .ok_or(ApiError::RatingNotFound)
}

/// Both referenced records must exist; the user is checked first.
pub async fn create_rating(
    State(state): State<AppState>,
    Db(store): Db,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Response> {
    let input = RatingInput::validate(json_body(body)?).map_err(ApiError::InvalidBody)?;
    if !store.contains::<User>(&input.user_id).await {
        return Err(ApiError::UserNotFound);
    }
    if !store.contains::<Butterfly>(&input.butterfly_id).await {
        return Err(ApiError::ButterflyNotFound);
    }
    let id = fresh_id::<Rating>(&store, state.ids.as_ref()).await;
    let rating = store.push(input.into_record(id)).await?;
    info!(id = %rating.id, butterfly = %rating.butterfly_id, "rating created");
    Ok(created(format!("/ratings/{}", rating.id), rating))
}

/// Overwrite the rating value. Accepts any number in `[0, 5]`, fractions
/// included, and ignores every other body field.
pub async fn update_rating(
    Db(store): Db,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Rating>> {
    let Ok(Json(body)) = body else {
        return Err(ApiError::InvalidRating);
    };
    let update = RatingUpdate::validate(&body).map_err(|_| ApiError::InvalidRating)?;
    store
        .assign::<Rating, _, _>(|r| r.id == id, |r| r.rating = update.rating)
        .await?
        .map(Json)
        .ok_or(ApiError::RatingNotFound)
}

pub async fn delete_rating(Db(store): Db, Path(id): Path<String>) -> ApiResult<StatusCode> {
    let removed = store.remove::<Rating, _>(|r| r.id == id).await?;
    if removed.is_empty() {
        return Err(ApiError::RatingNotFound);
    }
    info!(%id, "rating deleted");
    Ok(StatusCode::NO_CONTENT)
}
