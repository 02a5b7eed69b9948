//! User registration, log-in, and the cookie-carried session.
//!
//! There is no server-side session table: [log_in] produces a [Session]
//! snapshot which [set_session_cookie] places in a private (signed and
//! encrypted) cookie, and [auth_guard] reads it back on protected routes.

mod cookie;
mod log_in;
mod middleware;
mod redirect;
mod register;
mod session;
mod settings;

pub use cookie::{
    SESSION_COOKIE, SESSION_COOKIE_DURATION, get_session, remove_session_cookie,
    set_session_cookie,
};
pub use log_in::log_in;
pub use middleware::{AuthState, auth_guard};
pub use redirect::{LOG_IN_VIEW, build_log_in_redirect_url, normalize_redirect_url};
pub use register::{RegisteredUser, register_user};
pub use session::Session;
pub use settings::update_user_settings;
