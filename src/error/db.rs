use sea_orm::{DbErr, RuntimeErr};
use sqlx::{error::ErrorKind, sqlite::SqliteError, Error as SqlxError};

pub trait DatabaseError {
    fn unique_violation(&self) -> bool;
}

impl DatabaseError for DbErr {
    fn unique_violation(&self) -> bool {
        let Some(db_err) = get_database_error(self) else {
            return false;
        };

        if db_err.as_error().is::<SqliteError>() {
            return matches!(db_err.kind(), ErrorKind::UniqueViolation);
        }

        panic!("not using a sqlite connection");
    }
}

#[allow(clippy::borrowed_box)]
fn get_database_error(err: &DbErr) -> Option<&Box<dyn sqlx::error::DatabaseError + 'static>> {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        DbErr::Exec(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        _ => None,
    }
}
