//! The module contains the errors the engine can throw.
//!
//! - [`KeyNotFound`] thrown when a requested or referenced row does not exist.
//! - [`ExistingKey`] thrown when a name is already taken for its entity type.
//! - [`MissingRow`] thrown when a row vanished after its existence check.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`ExistingKey`]: EngineError::ExistingKey
//!  [`MissingRow`]: EngineError::MissingRow
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Carries the entity label, e.g. `"Account"`.
    #[error("{0} not found")]
    KeyNotFound(String),
    /// Carries the entity label whose name index rejected the write.
    #[error("Name already registered")]
    ExistingKey(String),
    /// A strict lookup found nothing although the caller proved existence.
    #[error("{entity} {id} missing after existence check")]
    MissingRow { entity: &'static str, id: i32 },
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl EngineError {
    /// Turns a unique index violation into [`EngineError::ExistingKey`].
    pub(crate) fn from_write(err: DbErr, entity: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::ExistingKey(entity.to_string()),
            _ => Self::Database(err),
        }
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (
                Self::MissingRow { entity: a, id: x },
                Self::MissingRow { entity: b, id: y },
            ) => a == b && x == y,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_http_details() {
        assert_eq!(
            EngineError::KeyNotFound("Payee".to_string()).to_string(),
            "Payee not found"
        );
        assert_eq!(
            EngineError::ExistingKey("Category".to_string()).to_string(),
            "Name already registered"
        );
    }

    #[test]
    fn other_database_errors_stay_database_errors() {
        let err = EngineError::from_write(DbErr::Custom("boom".to_string()), "Category");
        assert_eq!(err, EngineError::Database(DbErr::Custom("boom".to_string())));
    }
}
