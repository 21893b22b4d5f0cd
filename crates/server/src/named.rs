//! Handlers shared by every named resource (accounts, payees, categories).

use api_types::Pagination;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use axum_extra::extract::WithRejection;
use engine::Named;
use serde::{Serialize, de::DeserializeOwned};

use crate::{ServerError, server::ServerState};

/// Binds an engine entity to its HTTP path and wire shapes.
pub(crate) trait Resource: Named + 'static {
    /// Mount point, e.g. `"/account"`.
    const PATH: &'static str;

    type New: DeserializeOwned + Send + 'static;
    type Update: DeserializeOwned + Send + 'static;
    type View: Serialize + Send + 'static;

    fn input(new: Self::New) -> Self::Input;
    fn patch(update: Self::Update) -> Self::Patch;
    fn view(full: Self::Full) -> Self::View;
}

/// `POST /G`, `GET /G`, and `GET|PUT|DELETE /G/{id}` for `R`.
pub(crate) fn routes<R: Resource>() -> Router<ServerState> {
    let item = format!("{}/{{id}}", R::PATH);
    let collection = format!("{}/", R::PATH);

    Router::new()
        .route(R::PATH, get(list::<R>).post(create::<R>))
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(&item, get(read::<R>).put(update::<R>).delete(delete::<R>))
}

async fn create<R: Resource>(
    State(state): State<ServerState>,
    WithRejection(Json(payload), _): WithRejection<Json<R::New>, ServerError>,
) -> Result<Json<R::View>, ServerError> {
    let full = state.engine.create_named::<R>(R::input(payload)).await?;
    Ok(Json(R::view(full)))
}

async fn read<R: Resource>(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ServerError>,
) -> Result<Json<R::View>, ServerError> {
    let full = state.engine.named_full::<R>(id).await?;
    Ok(Json(R::view(full)))
}

async fn list<R: Resource>(
    State(state): State<ServerState>,
    WithRejection(Query(page), _): WithRejection<Query<Pagination>, ServerError>,
) -> Result<Json<Vec<R::View>>, ServerError> {
    let rows = state
        .engine
        .list_named_full::<R>(page.skip, page.limit)
        .await?;
    Ok(Json(rows.into_iter().map(R::view).collect()))
}

async fn update<R: Resource>(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ServerError>,
    WithRejection(Json(payload), _): WithRejection<Json<R::Update>, ServerError>,
) -> Result<Json<R::View>, ServerError> {
    let full = state
        .engine
        .update_named::<R>(id, R::patch(payload))
        .await?;
    Ok(Json(R::view(full)))
}

async fn delete<R: Resource>(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ServerError>,
) -> Result<Json<R::View>, ServerError> {
    let full = state.engine.delete_named::<R>(id).await?;
    tracing::debug!("deleted {} {id}", R::LABEL);
    Ok(Json(R::view(full)))
}
