use async_graphql::{Error, ErrorExtensions};
use hub_core::prelude::*;
use sea_orm::{sqlx, DbErr, RuntimeErr};

/// Failures surfaced by the marketplace resolvers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The write would break a uniqueness rule, e.g. a wallet address already linked to a user.
    #[error("{0}")]
    Conflict(String),
    /// The referenced record does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// The underlying store call failed.
    #[error("store failure: {0}")]
    StoreFailure(#[from] DbErr),
}

/// Unique violation codes reported by Postgres and by `SQLite` (extended result codes).
const UNIQUE_VIOLATION_CODES: [&str; 3] = ["23505", "2067", "1555"];

impl ApiError {
    /// Reports a unique constraint violation in `err` as [`ApiError::Conflict`] carrying `conflict`. Any
    /// other store error stays a [`ApiError::StoreFailure`].
    #[must_use]
    pub fn from_unique_violation(err: DbErr, conflict: &str) -> Self {
        if is_unique_violation(&err) {
            Self::Conflict(conflict.to_string())
        } else {
            Self::StoreFailure(err)
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Conflict(_) => "CONFLICT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::StoreFailure(_) => "STORE_FAILURE",
        }
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    let (DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(e)))
    | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(e)))) = err
    else {
        return false;
    };

    e.code()
        .map_or(false, |code| UNIQUE_VIOLATION_CODES.contains(&&*code))
        || e.message().starts_with("UNIQUE constraint failed")
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> Error {
        match self {
            Self::StoreFailure(e) => error!(error = %e, "store call failed"),
            Self::Conflict(_) | Self::NotFound(_) => warn!(error = %self, "request rejected"),
        }

        let code = self.code();

        Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}
