//! Generic persistence over any [`Record`].
//!
//! Every operation takes the connection (usually a `DatabaseTransaction`)
//! explicitly; the store keeps no state of its own.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PrimaryKeyTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{EngineError, ResultEngine};

mod named;

pub use named::{Named, NamedStore, transactions_total};

/// `OFFSET`/`LIMIT` are bound as signed 64-bit integers.
const MAX_ROWS: u64 = i64::MAX as u64;

/// Binds a sea-orm entity to its input and update shapes.
pub trait Record: EntityTrait<PrimaryKey: PrimaryKeyTrait<ValueType = i32>> {
    type Active: ActiveModelTrait<Entity = Self> + Send + 'static;
    /// Everything needed to create a row.
    type Input: Send;
    /// Partial update; absent fields keep their value.
    type Patch: Send;

    /// Human readable name used in "not found" messages.
    const LABEL: &'static str;

    fn id_column() -> Self::Column;
    fn id_of(model: &Self::Model) -> i32;
    fn new_active(input: Self::Input) -> Self::Active;
    fn apply_patch(active: &mut Self::Active, patch: Self::Patch);
}

/// Create/read/update/delete shared by every entity.
pub struct Store<E>(PhantomData<E>);

impl<E: Record> Store<E> {
    /// Inserts a new row; the id is assigned by the database.
    pub async fn create<C: ConnectionTrait>(db: &C, input: E::Input) -> ResultEngine<E::Model> {
        let inserted = E::insert(E::new_active(input))
            .exec(db)
            .await
            .map_err(|err| EngineError::from_write(err, E::LABEL))?;
        Self::get_strict(db, inserted.last_insert_id).await
    }

    /// Returns the row with `id`, if any.
    pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> ResultEngine<Option<E::Model>> {
        Ok(E::find().filter(E::id_column().eq(id)).one(db).await?)
    }

    /// Like [`Store::get`] but for callers that already proved the row
    /// exists: a miss is reported as [`EngineError::MissingRow`].
    pub async fn get_strict<C: ConnectionTrait>(db: &C, id: i32) -> ResultEngine<E::Model> {
        Self::get(db, id).await?.ok_or(EngineError::MissingRow {
            entity: E::LABEL,
            id,
        })
    }

    /// Rows ordered by id, skipping `skip` and returning at most `limit`.
    pub async fn get_many<C: ConnectionTrait>(
        db: &C,
        skip: u64,
        limit: u64,
    ) -> ResultEngine<Vec<E::Model>> {
        Ok(E::find()
            .order_by_asc(E::id_column())
            .offset(skip.min(MAX_ROWS))
            .limit(limit.min(MAX_ROWS))
            .all(db)
            .await?)
    }

    /// `None` means no reference was intended and is always valid; a set id
    /// is valid only if the row exists.
    pub async fn exists_or_null<C: ConnectionTrait>(db: &C, id: Option<i32>) -> ResultEngine<bool> {
        match id {
            None => Ok(true),
            Some(id) => Ok(Self::get(db, id).await?.is_some()),
        }
    }

    /// Applies the fields present in `patch`. The row must exist.
    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i32,
        patch: E::Patch,
    ) -> ResultEngine<E::Model> {
        let model = Self::get_strict(db, id).await?;
        let mut active = <E::Active as ActiveModelTrait>::default();
        E::apply_patch(&mut active, patch);
        if !active.is_changed() {
            return Ok(model);
        }

        E::update_many()
            .set(active)
            .filter(E::id_column().eq(id))
            .exec(db)
            .await
            .map_err(|err| EngineError::from_write(err, E::LABEL))?;
        Self::get_strict(db, id).await
    }

    /// Removes the row and returns it as it was right before deletion.
    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> ResultEngine<E::Model> {
        let model = Self::get_strict(db, id).await?;
        E::delete_many()
            .filter(E::id_column().eq(id))
            .exec(db)
            .await?;
        Ok(model)
    }
}
