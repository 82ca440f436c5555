use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use bfly_types::{sort_by_rating_desc, Rating, User, UserInput};
use serde_json::Value;
use tracing::info;

use super::{created, fresh_id, json_body};
use crate::context::Db;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user))
        .route("/users/:id/ratings", get(list_user_ratings))
}

pub async fn list_users(Db(store): Db) -> Json<Vec<User>> {
    Json(store.get().await)
}

pub async fn get_user(Db(store): Db, Path(id): Path<String>) -> ApiResult<Json<User>> {
    store
        .find_by_id::<User>(&id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_user(
    State(state): State<AppState>,
    Db(store): Db,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Response> {
    let input = UserInput::validate(json_body(body)?).map_err(ApiError::InvalidBody)?;
    let id = fresh_id::<User>(&store, state.ids.as_ref()).await;
    let user = store.push(input.into_record(id)).await?;
    info!(id = %user.id, "user created");
    Ok(created(format!("/users/{}", user.id), user))
}

/// Ratings submitted by one user, highest first.
pub async fn list_user_ratings(
    Db(store): Db,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Rating>>> {
    if !store.contains::<User>(&id).await {
        return Err(ApiError::NotFound);
    }
    let mut ratings = store.filter::<Rating, _>(|r| r.user_id == id).await;
    sort_by_rating_desc(&mut ratings);
    Ok(Json(ratings))
}
