//! Bookkeeping engine: accounts, payees, categories and the transactions
//! booked against them.
//!
//! Named entities ([`Account`], [`Payee`], [`Category`]) are read through a
//! *full view* whose aggregate columns (balance, expenditure, available) are
//! computed from their transactions at query time and never stored.

pub use accounts::{AccountFull, AccountInput, AccountPatch};
pub use categories::{CategoryFull, CategoryInput, CategoryPatch};
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};
pub use payees::{PayeeFull, PayeeInput, PayeePatch};
pub use store::{Named, NamedStore, Record, Store};
pub use transactions::{Model as Transaction, TransactionInput, TransactionPatch};

pub mod accounts;
pub mod categories;
mod error;
mod gate;
mod ops;
pub mod payees;
pub mod store;
pub mod transactions;

/// Marker for the account entity, e.g. `engine.named_full::<Account>(id)`.
pub type Account = accounts::Entity;
/// Marker for the payee entity.
pub type Payee = payees::Entity;
/// Marker for the category entity.
pub type Category = categories::Entity;

type ResultEngine<T> = Result<T, EngineError>;
