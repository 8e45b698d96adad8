use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Directory holding uploaded images, served at `/uploads` (default:
    /// `uploads`).
    pub uploads_dir: PathBuf,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Admin account synced into the credential store at startup. Both must
    /// be set for the bootstrap to run; neither has a default.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `3000`    |
    /// | `UPLOADS_DIR`          | `uploads` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `ADMIN_EMAIL`          | unset     |
    /// | `ADMIN_PASSWORD`       | unset     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let uploads_dir =
            PathBuf::from(std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".into()));

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_email = std::env::var("ADMIN_EMAIL").ok();
        let admin_password = std::env::var("ADMIN_PASSWORD").ok();

        Self {
            host,
            port,
            uploads_dir,
            request_timeout_secs,
            admin_email,
            admin_password,
        }
    }
}
