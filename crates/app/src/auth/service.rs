//! Auth service.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use sqlx::PgPool;

use crate::auth::{
    errors::AuthServiceError,
    models::{AuthenticatedUser, IssuedSession, SessionUuid},
    repository::PgAuthRepository,
    token::{
        SessionTokenVersion, format_session_token, generate_session_secret, hash_password,
        hash_token, parse_session_token,
    },
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
    session_ttl: SignedDuration,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool, session_ttl: SignedDuration) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
            session_ttl,
        }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IssuedSession, AuthServiceError> {
        let user = self
            .repository
            .find_user_for_login(email)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if hash_password(password) != user.password_hash {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let secret = generate_session_secret();
        let token = format_session_token(SessionTokenVersion::V1, &secret);

        let expires_at = Timestamp::now()
            .checked_add(self.session_ttl)
            .map_err(|_source| AuthServiceError::Clock)?;

        self.repository
            .create_session(SessionUuid::new(), user.uuid, &hash_token(&token), expires_at)
            .await?;

        Ok(IssuedSession {
            token,
            user: AuthenticatedUser {
                uuid: user.uuid,
                email: user.email,
                display_name: user.display_name,
                role: user.role,
            },
            expires_at,
        })
    }

    async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthServiceError> {
        parse_session_token(token).map_err(|_source| AuthServiceError::NotFound)?;

        self.repository
            .find_live_session(&hash_token(token))
            .await?
            .ok_or(AuthServiceError::NotFound)
    }

    async fn logout(&self, token: &str) -> Result<(), AuthServiceError> {
        // Idempotent: malformed, unknown, and already-revoked tokens all
        // leave the caller logged out.
        if parse_session_token(token).is_err() {
            return Ok(());
        }

        self.repository.revoke_session(&hash_token(token)).await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and issue a session token.
    async fn login(&self, email: &str, password: &str)
    -> Result<IssuedSession, AuthServiceError>;

    /// Resolve a session token to its user.
    async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthServiceError>;

    /// Revoke a session token.
    async fn logout(&self, token: &str) -> Result<(), AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::users::models::UserRole, test::TestContext};

    use super::*;

    #[tokio::test]
    async fn login_issues_a_token_that_authenticates() -> TestResult {
        let ctx = TestContext::new().await;

        let user = ctx
            .create_user("florist@example.com", "correct horse", UserRole::Admin)
            .await?;

        let session = ctx.auth.login("florist@example.com", "correct horse").await?;

        let current = ctx.auth.authenticate(&session.token).await?;

        assert_eq!(current.uuid, user);
        assert_eq!(current.role, UserRole::Admin);

        Ok(())
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.create_user("florist@example.com", "correct horse", UserRole::User)
            .await?;

        let result = ctx.auth.login("florist@example.com", "battery staple").await;

        assert!(
            matches!(result, Err(AuthServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_email_is_invalid_credentials() {
        let ctx = TestContext::new().await;

        let result = ctx.auth.login("nobody@example.com", "anything").await;

        assert!(
            matches!(result, Err(AuthServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {result:?}"
        );
    }

    #[tokio::test]
    async fn logout_revokes_the_session() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.create_user("florist@example.com", "correct horse", UserRole::User)
            .await?;

        let session = ctx.auth.login("florist@example.com", "correct horse").await?;

        ctx.auth.logout(&session.token).await?;

        let result = ctx.auth.authenticate(&session.token).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound after logout, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn logout_is_idempotent() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.create_user("florist@example.com", "correct horse", UserRole::User)
            .await?;

        let session = ctx.auth.login("florist@example.com", "correct horse").await?;

        ctx.auth.logout(&session.token).await?;
        ctx.auth.logout(&session.token).await?;
        ctx.auth.logout("not-even-a-token").await?;

        Ok(())
    }

    #[tokio::test]
    async fn malformed_token_does_not_authenticate() {
        let ctx = TestContext::new().await;

        let result = ctx.auth.authenticate("fl_v1_not-hex").await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn expired_session_does_not_authenticate() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.create_user("florist@example.com", "correct horse", UserRole::User)
            .await?;

        // A service whose sessions are already expired at issue time.
        let expired_auth = PgAuthService::new(
            ctx.db.pool().clone(),
            SignedDuration::from_secs(-1),
        );

        let session = expired_auth.login("florist@example.com", "correct horse").await?;

        let result = expired_auth.authenticate(&session.token).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound for expired session, got {result:?}"
        );

        Ok(())
    }
}
