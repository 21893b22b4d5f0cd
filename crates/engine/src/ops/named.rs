use sea_orm::TransactionTrait;

use crate::{
    EngineError, ResultEngine, gate,
    store::{Named, NamedStore, Store},
};

use super::{Engine, with_tx};

fn missing<E: Named>(id: i32) -> EngineError {
    EngineError::MissingRow {
        entity: E::LABEL,
        id,
    }
}

impl Engine {
    /// Creates a named entity and returns its full view (aggregates at zero).
    ///
    /// A taken name is reported as [`EngineError::ExistingKey`], whether it is
    /// caught by the lookup or by the unique index under a race.
    pub async fn create_named<E: Named>(&self, input: E::Input) -> ResultEngine<E::Full> {
        with_tx!(self, |db_tx| {
            if NamedStore::<E>::get_by_name(&db_tx, E::name_of(&input))
                .await?
                .is_some()
            {
                return Err(EngineError::ExistingKey(E::LABEL.to_string()));
            }

            let row = Store::<E>::create(&db_tx, input).await?;
            let id = E::id_of(&row);
            NamedStore::<E>::get_full(&db_tx, id)
                .await?
                .ok_or_else(|| missing::<E>(id))
        })
    }

    /// Full view of one named entity.
    pub async fn named_full<E: Named>(&self, id: i32) -> ResultEngine<E::Full> {
        with_tx!(self, |db_tx| {
            gate::require::<E, _>(&db_tx, id).await?;
            NamedStore::<E>::get_full(&db_tx, id)
                .await?
                .ok_or_else(|| missing::<E>(id))
        })
    }

    /// Full views ordered by id.
    pub async fn list_named_full<E: Named>(
        &self,
        skip: u64,
        limit: u64,
    ) -> ResultEngine<Vec<E::Full>> {
        with_tx!(self, |db_tx| {
            NamedStore::<E>::get_many_full(&db_tx, skip, limit).await
        })
    }

    /// Applies `patch` and returns the refreshed full view.
    pub async fn update_named<E: Named>(
        &self,
        id: i32,
        patch: E::Patch,
    ) -> ResultEngine<E::Full> {
        with_tx!(self, |db_tx| {
            gate::require::<E, _>(&db_tx, id).await?;
            Store::<E>::update(&db_tx, id, patch).await?;
            NamedStore::<E>::get_full(&db_tx, id)
                .await?
                .ok_or_else(|| missing::<E>(id))
        })
    }

    /// Deletes a named entity and returns its full view from right before
    /// the deletion.
    ///
    /// Transactions referencing it are left untouched.
    pub async fn delete_named<E: Named>(&self, id: i32) -> ResultEngine<E::Full> {
        with_tx!(self, |db_tx| {
            gate::require::<E, _>(&db_tx, id).await?;
            let full = NamedStore::<E>::get_full(&db_tx, id)
                .await?
                .ok_or_else(|| missing::<E>(id))?;
            Store::<E>::delete(&db_tx, id).await?;
            Ok(full)
        })
    }
}
