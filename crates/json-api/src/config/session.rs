//! Session Config

use clap::Args;
use jiff::SignedDuration;

/// Session cookie settings.
#[derive(Debug, Args)]
pub struct SessionConfig {
    /// Session lifetime in seconds
    #[arg(long, env = "SESSION_TTL_SECONDS", default_value_t = 86_400)]
    pub session_ttl_seconds: i64,

    /// Mark the session cookie `Secure` (HTTPS-only)
    #[arg(long, env = "SESSION_COOKIE_SECURE", default_value_t = false)]
    pub session_cookie_secure: bool,
}

impl SessionConfig {
    /// Session lifetime as a duration.
    #[must_use]
    pub fn session_ttl(&self) -> SignedDuration {
        SignedDuration::from_secs(self.session_ttl_seconds)
    }
}
