//! Authentication middleware that validates the session cookie and handles redirects.

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};

use crate::auth::{
    cookie::get_session,
    redirect::{LOG_IN_VIEW, build_log_in_redirect_url},
};

/// The state needed for the auth middleware.
#[derive(Clone)]
pub struct AuthState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AuthState> for Key {
    fn from_ref(state: &AuthState) -> Self {
        state.cookie_key.clone()
    }
}

/// Middleware function that checks for a valid session cookie.
///
/// The session snapshot is placed into the request and the request executed
/// normally if the cookie holds a session, otherwise a redirect to the log-in
/// page is returned carrying the originally requested path as a
/// `redirect_url` query parameter.
///
/// **Note**: Route handlers can use the function argument
/// `Extension(session): Extension<Session>` to receive the session.
pub async fn auth_guard(State(state): State<AuthState>, request: Request, next: Next) -> Response {
    let log_in_redirect_url =
        build_log_in_redirect_url(&request).unwrap_or_else(|| LOG_IN_VIEW.to_owned());

    let (mut parts, body) = request.into_parts();
    let jar = match PrivateCookieJar::from_request_parts(&mut parts, &state).await {
        Ok(jar) => jar,
        Err(err) => {
            tracing::error!("Error getting cookie jar: {err:?}. Redirecting to log in page.");
            return Redirect::to(&log_in_redirect_url).into_response();
        }
    };

    let session = match get_session(&jar) {
        Some(session) => session,
        None => return Redirect::to(&log_in_redirect_url).into_response(),
    };

    parts.extensions.insert(session);
    let request = Request::from_parts(parts, body);

    next.run(request).await
}

#[cfg(test)]
mod auth_guard_tests {
    use axum::{
        Extension, Router,
        extract::State,
        middleware,
        response::Html,
        routing::{get, post},
    };
    use axum_extra::extract::{PrivateCookieJar, cookie::Key};
    use axum_test::TestServer;
    use sha2::{Digest, Sha512};

    use crate::{
        auth::{SESSION_COOKIE, Session, set_session_cookie},
        models::{PasswordHash, User, UserID},
    };

    use super::{AuthState, auth_guard};

    const TEST_LOG_IN_ROUTE: &str = "/log_in";
    const TEST_PROTECTED_ROUTE: &str = "/protected";

    async fn test_handler(Extension(session): Extension<Session>) -> Html<String> {
        Html(format!("<h1>Hello, {}!</h1>", session.name))
    }

    async fn stub_log_in_route(
        State(_state): State<AuthState>,
        jar: PrivateCookieJar,
    ) -> PrivateCookieJar {
        let user = User::new(
            UserID::random(),
            "Ava".to_owned(),
            "ava@example.com".to_owned(),
            PasswordHash::new_unchecked("nothashed"),
            None,
        );

        set_session_cookie(jar, &Session::for_user(&user), false).unwrap()
    }

    fn get_test_server() -> TestServer {
        let hash = Sha512::digest("nafstenoas");
        let state = AuthState {
            cookie_key: Key::from(&hash),
        };

        let app = Router::new()
            .route(TEST_PROTECTED_ROUTE, get(test_handler))
            .route_layer(middleware::from_fn_with_state(state.clone(), auth_guard))
            .route(TEST_LOG_IN_ROUTE, post(stub_log_in_route))
            .with_state(state.clone());

        TestServer::new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn get_protected_route_with_valid_cookie() {
        let server = get_test_server();
        let response = server.post(TEST_LOG_IN_ROUTE).await;

        response.assert_status_ok();
        let session_cookie = response.cookie(SESSION_COOKIE);

        let response = server
            .get(TEST_PROTECTED_ROUTE)
            .add_cookie(session_cookie)
            .await;

        response.assert_status_ok();
        response.assert_text_contains("Hello, Ava!");
    }

    #[tokio::test]
    async fn get_protected_route_with_no_session_cookie_redirects_to_log_in() {
        let server = get_test_server();
        let response = server.get(TEST_PROTECTED_ROUTE).await;

        response.assert_status_see_other();
        let expected_query =
            serde_urlencoded::to_string([("redirect_url", TEST_PROTECTED_ROUTE)]).unwrap();
        assert_eq!(response.header("location"), format!("/?{expected_query}"));
    }

    #[tokio::test]
    async fn get_protected_route_with_garbage_cookie_redirects_to_log_in() {
        use axum_extra::extract::cookie::Cookie;

        let server = get_test_server();
        let response = server
            .get(TEST_PROTECTED_ROUTE)
            .add_cookie(Cookie::build((SESSION_COOKIE, "FOOBAR")).build())
            .await;

        response.assert_status_see_other();
        let expected_query =
            serde_urlencoded::to_string([("redirect_url", TEST_PROTECTED_ROUTE)]).unwrap();
        assert_eq!(response.header("location"), format!("/?{expected_query}"));
    }
}
