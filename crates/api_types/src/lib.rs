use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

/// Largest `skip`/`limit` the database accepts (a signed 64-bit integer).
pub const MAX_PAGE_VALUE: u64 = i64::MAX as u64;

/// `?skip=&limit=` on list endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, deserialize_with = "bounded")]
    pub skip: u64,
    #[serde(default = "default_limit", deserialize_with = "bounded")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    100
}

fn bounded<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = u64::deserialize(deserializer)?;
    if value > MAX_PAGE_VALUE {
        return Err(D::Error::custom(format!(
            "must not be greater than {MAX_PAGE_VALUE}"
        )));
    }
    Ok(value)
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

pub mod account {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountNew {
        pub name: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct AccountUpdate {
        pub name: Option<String>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    pub struct AccountView {
        pub id: i32,
        pub name: String,
        pub balance: f64,
    }
}

pub mod payee {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PayeeNew {
        pub name: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct PayeeUpdate {
        pub name: Option<String>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    pub struct PayeeView {
        pub id: i32,
        pub name: String,
        pub expenditure: f64,
    }
}

pub mod category {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryNew {
        pub name: String,
        pub budget: f64,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CategoryUpdate {
        pub name: Option<String>,
        pub budget: Option<f64>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    pub struct CategoryView {
        pub id: i32,
        pub name: String,
        pub budget: f64,
        /// Sum of the category's transaction values (expenses are negative).
        pub expenditure: f64,
        /// `budget + expenditure`.
        pub available: f64,
    }
}

pub mod transaction {
    use chrono::NaiveDateTime;

    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        /// Local timestamp without offset, e.g. `2020-03-04T18:52:50.637635`.
        /// Defaults to the server's current local time.
        pub date_time: Option<NaiveDateTime>,
        pub account_id: Option<i32>,
        pub payee_id: Option<i32>,
        pub category_id: Option<i32>,
        /// Signed: expenses are negative.
        pub value: f64,
        pub comment: Option<String>,
    }

    /// Fields left out (or `null`) keep their current value.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionUpdate {
        pub date_time: Option<NaiveDateTime>,
        pub account_id: Option<i32>,
        pub payee_id: Option<i32>,
        pub category_id: Option<i32>,
        pub value: Option<f64>,
        pub comment: Option<String>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: i32,
        pub date_time: NaiveDateTime,
        pub account_id: Option<i32>,
        pub payee_id: Option<i32>,
        pub category_id: Option<i32>,
        pub value: f64,
        pub comment: Option<String>,
    }
}
