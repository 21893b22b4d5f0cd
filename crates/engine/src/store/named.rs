//! Stores for entities with a unique name and a transaction aggregate.
//!
//! The join, grouping and pagination are shared; each entity only supplies
//! the columns it aggregates (see [`Named::aggregates`]).

use std::marker::PhantomData;

use sea_orm::{
    ColumnTrait, ConnectionTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationDef, Select,
    sea_query::{Expr, Func, SimpleExpr},
};

use super::{MAX_ROWS, Record};
use crate::{ResultEngine, transactions};

/// An entity with a unique `name` and a full view computed against the
/// transactions that reference it.
pub trait Named: Record {
    /// The full view: id, name and every aggregate column by alias.
    type Full: FromQueryResult + Send + Sync;

    fn name_column() -> Self::Column;
    fn name_of(input: &Self::Input) -> &str;
    /// Relation from the entity to the transactions referencing it.
    fn transactions() -> RelationDef;
    /// `(alias, expression)` pairs selected next to id and name.
    fn aggregates() -> Vec<(&'static str, SimpleExpr)>;
}

/// `COALESCE(SUM(transaction.value), 0.0)`: zero when nothing is booked.
pub fn transactions_total() -> SimpleExpr {
    let sum: SimpleExpr = Func::sum(Expr::col((
        transactions::Entity,
        transactions::Column::Value,
    )))
    .into();
    Func::coalesce([sum, Expr::val(0.0_f64).into()]).into()
}

pub struct NamedStore<E>(PhantomData<E>);

impl<E: Named> NamedStore<E> {
    /// Exact, case-sensitive lookup.
    pub async fn get_by_name<C: ConnectionTrait>(
        db: &C,
        name: &str,
    ) -> ResultEngine<Option<E::Model>> {
        Ok(E::find().filter(E::name_column().eq(name)).one(db).await?)
    }

    /// Full view of the row with `id`, if any.
    pub async fn get_full<C: ConnectionTrait>(db: &C, id: i32) -> ResultEngine<Option<E::Full>> {
        Ok(Self::select_full()
            .filter(E::id_column().eq(id))
            .into_model::<E::Full>()
            .one(db)
            .await?)
    }

    /// Full views ordered by id; `skip`/`limit` apply to the grouped rows.
    pub async fn get_many_full<C: ConnectionTrait>(
        db: &C,
        skip: u64,
        limit: u64,
    ) -> ResultEngine<Vec<E::Full>> {
        Ok(Self::select_full()
            .order_by_asc(E::id_column())
            .offset(skip.min(MAX_ROWS))
            .limit(limit.min(MAX_ROWS))
            .into_model::<E::Full>()
            .all(db)
            .await?)
    }

    fn select_full() -> Select<E> {
        let select = E::find()
            .select_only()
            .column(E::id_column())
            .column(E::name_column());

        E::aggregates()
            .into_iter()
            .fold(select, |select, (alias, expr)| select.column_as(expr, alias))
            .join(JoinType::LeftJoin, E::transactions())
            .group_by(E::id_column())
    }
}
