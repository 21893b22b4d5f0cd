use sea_orm::TransactionTrait;

use crate::{
    ResultEngine, Transaction, TransactionInput, TransactionPatch, gate, store::Store,
    transactions,
};

use super::{Engine, with_tx};

type Transactions = Store<transactions::Entity>;

impl Engine {
    /// Records a transaction after checking its references (account, then
    /// payee, then category).
    pub async fn create_transaction(&self, input: TransactionInput) -> ResultEngine<Transaction> {
        with_tx!(self, |db_tx| {
            gate::check_references(
                &db_tx,
                input.account_id,
                input.payee_id,
                input.category_id,
            )
            .await?;
            Transactions::create(&db_tx, input).await
        })
    }

    pub async fn transaction(&self, id: i32) -> ResultEngine<Transaction> {
        with_tx!(self, |db_tx| {
            gate::require::<transactions::Entity, _>(&db_tx, id).await?;
            Transactions::get_strict(&db_tx, id).await
        })
    }

    /// Transactions ordered by id.
    pub async fn list_transactions(&self, skip: u64, limit: u64) -> ResultEngine<Vec<Transaction>> {
        with_tx!(self, |db_tx| {
            Transactions::get_many(&db_tx, skip, limit).await
        })
    }

    /// Applies `patch`. References set by the patch are checked like on
    /// creation.
    pub async fn update_transaction(
        &self,
        id: i32,
        patch: TransactionPatch,
    ) -> ResultEngine<Transaction> {
        with_tx!(self, |db_tx| {
            gate::require::<transactions::Entity, _>(&db_tx, id).await?;
            gate::check_references(
                &db_tx,
                patch.account_id,
                patch.payee_id,
                patch.category_id,
            )
            .await?;
            Transactions::update(&db_tx, id, patch).await
        })
    }

    /// Deletes a transaction and returns it as it was.
    pub async fn delete_transaction(&self, id: i32) -> ResultEngine<Transaction> {
        with_tx!(self, |db_tx| {
            gate::require::<transactions::Entity, _>(&db_tx, id).await?;
            Transactions::delete(&db_tx, id).await
        })
    }
}
