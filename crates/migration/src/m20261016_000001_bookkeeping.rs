//! Initial schema: the three named tables and the transaction ledger.
//!
//! - `account`: where money is kept
//! - `payee`: who money goes to (or comes from)
//! - `category`: budget buckets with a user-set budget
//! - `transaction`: signed values optionally tracked against each of the above
//!
//! The reference columns on `transaction` are indexed but carry no foreign-key
//! constraint: deleting a named row leaves its transactions pointing at a
//! missing id. Reference checks happen in the engine at write time.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Account {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Payee {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Category {
    Table,
    Id,
    Name,
    Budget,
}

#[derive(Iden)]
enum Transaction {
    Table,
    Id,
    DateTime,
    AccountId,
    PayeeId,
    CategoryId,
    Value,
    Comment,
}

fn id_column<T: IntoIden>(iden: T) -> ColumnDef {
    ColumnDef::new(iden)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(id_column(Account::Id))
                    .col(ColumnDef::new(Account::Name).string().not_null())
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-account-name-unique")
                    .table(Account::Table)
                    .col(Account::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Payee::Table)
                    .if_not_exists()
                    .col(id_column(Payee::Id))
                    .col(ColumnDef::new(Payee::Name).string().not_null())
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-payee-name-unique")
                    .table(Payee::Table)
                    .col(Payee::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(id_column(Category::Id))
                    .col(ColumnDef::new(Category::Name).string().not_null())
                    .col(ColumnDef::new(Category::Budget).double().not_null())
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-category-name-unique")
                    .table(Category::Table)
                    .col(Category::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Transaction::Table)
                    .if_not_exists()
                    .col(id_column(Transaction::Id))
                    .col(ColumnDef::new(Transaction::DateTime).date_time().not_null())
                    .col(ColumnDef::new(Transaction::AccountId).integer())
                    .col(ColumnDef::new(Transaction::PayeeId).integer())
                    .col(ColumnDef::new(Transaction::CategoryId).integer())
                    .col(ColumnDef::new(Transaction::Value).double().not_null())
                    .col(ColumnDef::new(Transaction::Comment).string())
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx-transaction-account_id", Transaction::AccountId),
            ("idx-transaction-payee_id", Transaction::PayeeId),
            ("idx-transaction-category_id", Transaction::CategoryId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Transaction::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transaction::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payee::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await?;
        Ok(())
    }
}
