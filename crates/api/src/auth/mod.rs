//! Admin credential verification.
//!
//! Credentials live in the `admin_users` table rather than in code; the
//! single configured account is synced in at startup by [`bootstrap_admin`].
//! Handlers go through the [`CredentialVerifier`] trait so the store can be
//! swapped without touching the login flow.

pub mod password;

use async_trait::async_trait;

use atelier_db::repositories::AdminUserRepo;
use atelier_db::DbPool;

use crate::config::ServerConfig;

/// Opaque token minted on a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    fn mint() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unknown account or wrong password. The two cases are deliberately
    /// indistinguishable to the caller.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("credential store error: {0}")]
    Store(String),
}

/// Capability to check a credential pair and mint a session token.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str)
        -> Result<SessionToken, AuthError>;
}

/// [`CredentialVerifier`] backed by the `admin_users` table with Argon2id
/// hashes.
pub struct DbCredentialVerifier {
    pool: DbPool,
}

impl DbCredentialVerifier {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialVerifier for DbCredentialVerifier {
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionToken, AuthError> {
        let user = AdminUserRepo::find_by_email(&self.pool, email)
            .await
            .map_err(|e| AuthError::Store(e.to_string()))?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = password::verify_password(password, &user.password_hash)
            .map_err(|e| AuthError::Store(e.to_string()))?;

        if valid {
            Ok(SessionToken::mint())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Sync the configured admin account into the credential store.
///
/// Runs at startup when both `ADMIN_EMAIL` and `ADMIN_PASSWORD` are set; the
/// stored hash is overwritten so a changed password takes effect on restart.
pub async fn bootstrap_admin(pool: &DbPool, config: &ServerConfig) -> Result<(), sqlx::Error> {
    let (Some(email), Some(pw)) = (&config.admin_email, &config.admin_password) else {
        tracing::warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set, skipping admin bootstrap");
        return Ok(());
    };

    let hash = password::hash_password(pw)
        .unwrap_or_else(|e| panic!("Failed to hash configured admin password: {e}"));

    AdminUserRepo::upsert(pool, email, &hash).await?;
    tracing::info!(%email, "Admin account synced");
    Ok(())
}
