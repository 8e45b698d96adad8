//! Repository for the `admin_users` credential store.

use sqlx::PgPool;

use crate::models::admin_user::AdminUser;

/// Column list for `admin_users` queries.
const ADMIN_USER_COLUMNS: &str = "id, email, password_hash, created_at";

/// Access to admin credential records.
pub struct AdminUserRepo;

impl AdminUserRepo {
    /// Find an admin user by email.
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<AdminUser>, sqlx::Error> {
        let query = format!("SELECT {ADMIN_USER_COLUMNS} FROM admin_users WHERE email = $1");
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Insert or update the credential record for `email`.
    ///
    /// Used at startup to sync the configured admin account; the hash always
    /// wins so a changed `ADMIN_PASSWORD` takes effect on restart.
    pub async fn upsert(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
    ) -> Result<AdminUser, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_users (email, password_hash) VALUES ($1, $2) \
             ON CONFLICT (email) \
             DO UPDATE SET password_hash = EXCLUDED.password_hash \
             RETURNING {ADMIN_USER_COLUMNS}"
        );
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(email)
            .bind(password_hash)
            .fetch_one(pool)
            .await
    }
}
