//! Auth repository.

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Row, postgres::PgRow, query, query_as};

use crate::{
    auth::models::{AuthenticatedUser, SessionUuid},
    domain::users::models::{UserRole, UserUuid},
};

const FIND_USER_FOR_LOGIN_SQL: &str = include_str!("sql/find_user_for_login.sql");
const CREATE_SESSION_SQL: &str = include_str!("sql/create_session.sql");
const FIND_LIVE_SESSION_SQL: &str = include_str!("sql/find_live_session.sql");
const REVOKE_SESSION_SQL: &str = include_str!("sql/revoke_session.sql");

/// User row as needed for credential verification.
#[derive(Debug, Clone)]
pub(crate) struct LoginRow {
    pub(crate) uuid: UserUuid,
    pub(crate) email: String,
    pub(crate) display_name: String,
    pub(crate) role: UserRole,
    pub(crate) password_hash: String,
}

#[derive(Debug, Clone)]
pub(crate) struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn find_user_for_login(
        &self,
        email: &str,
    ) -> Result<Option<LoginRow>, sqlx::Error> {
        query_as::<_, LoginRow>(FIND_USER_FOR_LOGIN_SQL)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn create_session(
        &self,
        session: SessionUuid,
        user: UserUuid,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_SESSION_SQL)
            .bind(session.into_uuid())
            .bind(user.into_uuid())
            .bind(token_hash)
            .bind(SqlxTimestamp::from(expires_at))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Resolve an unexpired, unrevoked session to its user.
    pub(crate) async fn find_live_session(
        &self,
        token_hash: &str,
    ) -> Result<Option<AuthenticatedUser>, sqlx::Error> {
        query_as::<_, AuthenticatedUser>(FIND_LIVE_SESSION_SQL)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
    }

    /// Revoke a session. Returns the number of sessions revoked; revoking
    /// an already-revoked or unknown session is not an error.
    pub(crate) async fn revoke_session(&self, token_hash: &str) -> Result<u64, sqlx::Error> {
        let rows_affected = query(REVOKE_SESSION_SQL)
            .bind(token_hash)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn role_from_row(row: &PgRow) -> sqlx::Result<UserRole> {
    let role: String = row.try_get("role")?;

    role.parse::<UserRole>()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: "role".to_string(),
            source: Box::new(e),
        })
}

impl<'r> FromRow<'r, PgRow> for LoginRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: UserUuid::from_uuid(row.try_get("uuid")?),
            email: row.try_get("email")?,
            display_name: row.try_get("display_name")?,
            role: role_from_row(row)?,
            password_hash: row.try_get("password_hash")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for AuthenticatedUser {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: UserUuid::from_uuid(row.try_get("uuid")?),
            email: row.try_get("email")?,
            display_name: row.try_get("display_name")?,
            role: role_from_row(row)?,
        })
    }
}
