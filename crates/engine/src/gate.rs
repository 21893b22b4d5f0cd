//! Reference checks run before a write reaches the store.

use sea_orm::ConnectionTrait;

use crate::{
    EngineError, ResultEngine, accounts, categories, payees,
    store::{Record, Store},
};

/// Fails with [`EngineError::KeyNotFound`] unless the row with `id` exists.
pub(crate) async fn require<E: Record, C: ConnectionTrait>(db: &C, id: i32) -> ResultEngine<()> {
    ensure::<E, C>(db, Some(id)).await
}

/// Checks the optional references of a transaction in order account, payee,
/// category; the first dangling one is reported.
pub(crate) async fn check_references<C: ConnectionTrait>(
    db: &C,
    account_id: Option<i32>,
    payee_id: Option<i32>,
    category_id: Option<i32>,
) -> ResultEngine<()> {
    ensure::<accounts::Entity, C>(db, account_id).await?;
    ensure::<payees::Entity, C>(db, payee_id).await?;
    ensure::<categories::Entity, C>(db, category_id).await?;
    Ok(())
}

async fn ensure<E: Record, C: ConnectionTrait>(db: &C, id: Option<i32>) -> ResultEngine<()> {
    if Store::<E>::exists_or_null(db, id).await? {
        Ok(())
    } else {
        Err(EngineError::KeyNotFound(E::LABEL.to_string()))
    }
}
