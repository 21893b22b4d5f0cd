//! Transactions: signed values, optionally tracked against an account, a
//! payee and a category.
//!
//! A transaction with all three references unset is *untracked*. References
//! are checked at write time only; rows may outlive the entity they point at.

use chrono::{Local, NaiveDateTime};
use sea_orm::{ActiveValue, entity::prelude::*};

use crate::store::Record;

/// Fields required to record a transaction.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionInput {
    /// Defaults to the local time at creation.
    pub date_time: Option<NaiveDateTime>,
    pub account_id: Option<i32>,
    pub payee_id: Option<i32>,
    pub category_id: Option<i32>,
    pub value: f64,
    pub comment: Option<String>,
}

/// Partial update; `None` leaves the field untouched, so a reference cannot
/// be cleared through a patch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionPatch {
    pub date_time: Option<NaiveDateTime>,
    pub account_id: Option<i32>,
    pub payee_id: Option<i32>,
    pub category_id: Option<i32>,
    pub value: Option<f64>,
    pub comment: Option<String>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date_time: NaiveDateTime,
    pub account_id: Option<i32>,
    pub payee_id: Option<i32>,
    pub category_id: Option<i32>,
    pub value: f64,
    pub comment: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id"
    )]
    Account,
    #[sea_orm(
        belongs_to = "super::payees::Entity",
        from = "Column::PayeeId",
        to = "super::payees::Column::Id"
    )]
    Payee,
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Category,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::payees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payee.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Record for Entity {
    type Active = ActiveModel;
    type Input = TransactionInput;
    type Patch = TransactionPatch;

    const LABEL: &'static str = "Transaction";

    fn id_column() -> Column {
        Column::Id
    }

    fn id_of(model: &Model) -> i32 {
        model.id
    }

    fn new_active(input: TransactionInput) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            date_time: ActiveValue::Set(
                input
                    .date_time
                    .unwrap_or_else(|| Local::now().naive_local()),
            ),
            account_id: ActiveValue::Set(input.account_id),
            payee_id: ActiveValue::Set(input.payee_id),
            category_id: ActiveValue::Set(input.category_id),
            value: ActiveValue::Set(input.value),
            comment: ActiveValue::Set(input.comment),
        }
    }

    fn apply_patch(active: &mut ActiveModel, patch: TransactionPatch) {
        if let Some(date_time) = patch.date_time {
            active.date_time = ActiveValue::Set(date_time);
        }
        if let Some(account_id) = patch.account_id {
            active.account_id = ActiveValue::Set(Some(account_id));
        }
        if let Some(payee_id) = patch.payee_id {
            active.payee_id = ActiveValue::Set(Some(payee_id));
        }
        if let Some(category_id) = patch.category_id {
            active.category_id = ActiveValue::Set(Some(category_id));
        }
        if let Some(value) = patch.value {
            active.value = ActiveValue::Set(value);
        }
        if let Some(comment) = patch.comment {
            active.comment = ActiveValue::Set(Some(comment));
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn model() -> Model {
        Model {
            id: 7,
            date_time: NaiveDate::from_ymd_opt(2020, 3, 4)
                .and_then(|d| d.and_hms_opt(18, 52, 50))
                .unwrap(),
            account_id: Some(1),
            payee_id: None,
            category_id: Some(2),
            value: -1000.0,
            comment: Some("Rent payment".to_string()),
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut active: ActiveModel = model().into();
        Entity::apply_patch(&mut active, TransactionPatch::default());
        assert!(!active.is_changed());
    }

    #[test]
    fn patch_sets_only_present_fields() {
        let mut active: ActiveModel = model().into();
        Entity::apply_patch(
            &mut active,
            TransactionPatch {
                value: Some(-250.0),
                payee_id: Some(3),
                ..Default::default()
            },
        );

        assert_eq!(active.value, ActiveValue::Set(-250.0));
        assert_eq!(active.payee_id, ActiveValue::Set(Some(3)));
        assert_eq!(active.account_id, ActiveValue::Unchanged(Some(1)));
        assert_eq!(
            active.comment,
            ActiveValue::Unchanged(Some("Rent payment".to_string()))
        );
    }

    #[test]
    fn missing_date_defaults_to_now() {
        let before = Local::now().naive_local();
        let active = Entity::new_active(TransactionInput {
            date_time: None,
            account_id: None,
            payee_id: None,
            category_id: None,
            value: 12.5,
            comment: None,
        });
        let ActiveValue::Set(date_time) = active.date_time else {
            panic!("date_time must be set");
        };
        assert!(date_time >= before);
        assert_eq!(active.id, ActiveValue::NotSet);
    }
}
