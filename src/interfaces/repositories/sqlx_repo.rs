use sqlx::{pool::PoolConnection, Sqlite, SqliteConnection, SqlitePool};

use crate::errors::AppError;

/// Store handle scoped to one request.
///
/// Owns a single pooled connection used by every repository call made while
/// handling the request. The connection goes back to the pool when the store
/// is dropped, on success and error paths alike.
pub struct SqlxStore {
    conn: PoolConnection<Sqlite>,
}

impl SqlxStore {
    pub async fn acquire(pool: &SqlitePool) -> Result<Self, AppError> {
        let conn = pool
            .acquire()
            .await
            .map_err(|e| AppError::StoreUnavailable(e.to_string()))?;

        Ok(SqlxStore { conn })
    }

    pub(crate) fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }
}
