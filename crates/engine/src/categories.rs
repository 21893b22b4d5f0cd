//! Categories: budget buckets.
//!
//! A category carries a user-set `budget`. Its full view adds the
//! `expenditure` (sum of its transaction values) and what is still
//! `available` (`budget + expenditure`). Expenses are negative values, so
//! spending shrinks `available`.

use sea_orm::{
    ActiveValue, FromQueryResult,
    entity::prelude::*,
    sea_query::{Expr, SimpleExpr},
};

use crate::store::{Named, Record, transactions_total};

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryInput {
    pub name: String,
    pub budget: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub budget: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct CategoryFull {
    pub id: i32,
    pub name: String,
    pub budget: f64,
    pub expenditure: f64,
    pub available: f64,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub budget: f64,
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
    type Input = CategoryInput;
    type Patch = CategoryPatch;

    const LABEL: &'static str = "Category";

    fn id_column() -> Column {
        Column::Id
    }

    fn id_of(model: &Model) -> i32 {
        model.id
    }

    fn new_active(input: CategoryInput) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(input.name),
            budget: ActiveValue::Set(input.budget),
        }
    }

    fn apply_patch(active: &mut ActiveModel, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(budget) = patch.budget {
            active.budget = ActiveValue::Set(budget);
        }
    }
}

impl Named for Entity {
    type Full = CategoryFull;

    fn name_column() -> Column {
        Column::Name
    }

    fn name_of(input: &CategoryInput) -> &str {
        &input.name
    }

    fn transactions() -> RelationDef {
        Relation::Transactions.def()
    }

    fn aggregates() -> Vec<(&'static str, SimpleExpr)> {
        vec![
            ("budget", Expr::col((Entity, Column::Budget)).into()),
            ("expenditure", transactions_total()),
            (
                "available",
                Expr::col((Entity, Column::Budget)).add(transactions_total()),
            ),
        ]
    }
}
