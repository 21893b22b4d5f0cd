//! Accounts: where money is kept (a bank account, a wallet, a card).

use sea_orm::{ActiveValue, FromQueryResult, entity::prelude::*, sea_query::SimpleExpr};

use crate::store::{Named, Record, transactions_total};

/// Fields required to open an account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountInput {
    pub name: String,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountPatch {
    pub name: Option<String>,
}

/// Account joined with its transactions.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct AccountFull {
    pub id: i32,
    pub name: String,
    /// Sum of all transaction values booked on the account.
    pub balance: f64,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Record for Entity {
    type Active = ActiveModel;
    type Input = AccountInput;
    type Patch = AccountPatch;

    const LABEL: &'static str = "Account";

    fn id_column() -> Column {
        Column::Id
    }

    fn id_of(model: &Model) -> i32 {
        model.id
    }

    fn new_active(input: AccountInput) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(input.name),
        }
    }

    fn apply_patch(active: &mut ActiveModel, patch: AccountPatch) {
        if let Some(name) = patch.name {
            active.name = ActiveValue::Set(name);
        }
    }
}

impl Named for Entity {
    type Full = AccountFull;

    fn name_column() -> Column {
        Column::Name
    }

    fn name_of(input: &AccountInput) -> &str {
        &input.name
    }

    fn transactions() -> RelationDef {
        Relation::Transactions.def()
    }

    fn aggregates() -> Vec<(&'static str, SimpleExpr)> {
        vec![("balance", transactions_total())]
    }
}
