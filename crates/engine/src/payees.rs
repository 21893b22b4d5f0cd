//! Payees: the other side of a transaction.

use sea_orm::{ActiveValue, FromQueryResult, entity::prelude::*, sea_query::SimpleExpr};

use crate::store::{Named, Record, transactions_total};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayeeInput {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PayeePatch {
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct PayeeFull {
    pub id: i32,
    pub name: String,
    pub expenditure: f64,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payee")]
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
    type Input = PayeeInput;
    type Patch = PayeePatch;

    const LABEL: &'static str = "Payee";

    fn id_column() -> Column {
        Column::Id
    }

    fn id_of(model: &Model) -> i32 {
        model.id
    }

    fn new_active(input: PayeeInput) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(input.name),
        }
    }

    fn apply_patch(active: &mut ActiveModel, patch: PayeePatch) {
        if let Some(name) = patch.name {
            active.name = ActiveValue::Set(name);
        }
    }
}

impl Named for Entity {
    type Full = PayeeFull;

    fn name_column() -> Column {
        Column::Name
    }

    fn name_of(input: &PayeeInput) -> &str {
        &input.name
    }

    fn transactions() -> RelationDef {
        Relation::Transactions.def()
    }

    fn aggregates() -> Vec<(&'static str, SimpleExpr)> {
        vec![("expenditure", transactions_total())]
    }
}
