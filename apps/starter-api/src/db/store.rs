use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::pool::DbPool;
use crate::db::schema::users;
use crate::error::ApiError;
use crate::models::user::UserRecord;

/// Capability for reading user records.
///
/// Handlers depend on this trait rather than on a concrete database so
/// tests can substitute an in-memory fake.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user record by its ID. `Ok(None)` when no row matches.
    async fn user_by_id(&self, user_id: &str) -> Result<Option<UserRecord>, ApiError>;
}

/// [`UserStore`] backed by the Postgres `users` table.
pub struct PgUserStore {
    pool: DbPool,
}

impl PgUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn user_by_id(&self, user_id: &str) -> Result<Option<UserRecord>, ApiError> {
        let mut conn = self.pool.get().await?;

        let record = users::table
            .find(user_id)
            .select(UserRecord::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(ApiError::from)?;

        Ok(record)
    }
}
