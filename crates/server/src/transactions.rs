//! Transaction API endpoints

use api_types::{
    Pagination,
    transaction::{TransactionNew, TransactionUpdate, TransactionView},
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use axum_extra::extract::WithRejection;
use engine::{Transaction, TransactionInput, TransactionPatch};

use crate::{ServerError, server::ServerState};

pub(crate) fn routes() -> Router<ServerState> {
    Router::new()
        .route("/transaction", get(list).post(create))
        .route("/transaction/", get(list).post(create))
        .route("/transaction/{id}", get(read).put(update).delete(delete))
}

fn view(tx: Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        date_time: tx.date_time,
        account_id: tx.account_id,
        payee_id: tx.payee_id,
        category_id: tx.category_id,
        value: tx.value,
        comment: tx.comment,
    }
}

/// Handle requests for recording a new transaction
async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(payload), _): WithRejection<Json<TransactionNew>, ServerError>,
) -> Result<Json<TransactionView>, ServerError> {
    let tx = state
        .engine
        .create_transaction(TransactionInput {
            date_time: payload.date_time,
            account_id: payload.account_id,
            payee_id: payload.payee_id,
            category_id: payload.category_id,
            value: payload.value,
            comment: payload.comment,
        })
        .await?;
    tracing::debug!("recorded transaction {}", tx.id);

    Ok(Json(view(tx)))
}

async fn read(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ServerError>,
) -> Result<Json<TransactionView>, ServerError> {
    Ok(Json(view(state.engine.transaction(id).await?)))
}

async fn list(
    State(state): State<ServerState>,
    WithRejection(Query(page), _): WithRejection<Query<Pagination>, ServerError>,
) -> Result<Json<Vec<TransactionView>>, ServerError> {
    let rows = state
        .engine
        .list_transactions(page.skip, page.limit)
        .await?;
    Ok(Json(rows.into_iter().map(view).collect()))
}

/// Handle partial updates; references set in the body are checked again.
async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ServerError>,
    WithRejection(Json(payload), _): WithRejection<Json<TransactionUpdate>, ServerError>,
) -> Result<Json<TransactionView>, ServerError> {
    let patch = TransactionPatch {
        date_time: payload.date_time,
        account_id: payload.account_id,
        payee_id: payload.payee_id,
        category_id: payload.category_id,
        value: payload.value,
        comment: payload.comment,
    };
    let tx = state.engine.update_transaction(id, patch).await?;

    Ok(Json(view(tx)))
}

async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ServerError>,
) -> Result<Json<TransactionView>, ServerError> {
    Ok(Json(view(state.engine.delete_transaction(id).await?)))
}
