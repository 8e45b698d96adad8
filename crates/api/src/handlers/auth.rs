//! Admin login: form page and credential submission.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::auth::AuthError;
use crate::state::AppState;
use crate::views::{self, PageContext};

/// Form body for `POST /login-submit`. The login form labels the field
/// "Email" but submits it as `username`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// GET /admin/login
pub async fn login_page() -> Html<String> {
    Html(views::login_page(&PageContext::new("/admin/login")))
}

/// POST /login-submit
///
/// Always redirects: to `/admin` with a session cookie on success, back to
/// the login form otherwise. Store failures are logged server-side and look
/// like a failed login to the client.
pub async fn login_submit(
    State(state): State<AppState>,
    axum::Form(input): axum::Form<LoginForm>,
) -> Response {
    match state
        .verifier
        .authenticate(&input.username, &input.password)
        .await
    {
        Ok(token) => {
            let cookie = format!(
                "atelier_session={}; Path=/; HttpOnly; SameSite=Lax",
                token.as_str()
            );
            ([(SET_COOKIE, cookie)], Redirect::to("/admin")).into_response()
        }
        Err(AuthError::InvalidCredentials) => Redirect::to("/admin/login").into_response(),
        Err(AuthError::Store(e)) => {
            tracing::error!(error = %e, "Credential store failure during login");
            Redirect::to("/admin/login").into_response()
        }
    }
}
