//! Helpers for redirect URLs during authentication flows.

use axum::{extract::Request, http::Uri};
use tracing::error;

/// The unauthenticated entry point: the landing page with the log-in form.
pub const LOG_IN_VIEW: &str = "/";

fn is_safe_redirect_url(redirect_url: &str) -> bool {
    if !redirect_url.starts_with('/') || redirect_url.starts_with("//") {
        return false;
    }

    let path = redirect_url
        .split_once('?')
        .map(|(path, _)| path)
        .unwrap_or(redirect_url);

    path != LOG_IN_VIEW
}

/// Validate a requested redirect target, rejecting anything that could leave the site.
///
/// Returns `None` for absolute URLs, protocol-relative URLs, and the log-in
/// page itself.
pub fn normalize_redirect_url(raw_url: &str) -> Option<String> {
    let uri = raw_url.parse::<Uri>().ok()?;
    if uri.scheme().is_some() || uri.authority().is_some() {
        return None;
    }
    let path_and_query = uri.path_and_query()?.as_str();

    is_safe_redirect_url(path_and_query).then(|| path_and_query.to_owned())
}

/// Build the log-in page URL carrying the originally requested path, so the
/// embedding app can send the user back after a successful log-in.
///
/// Returns `None` if the request URI is not a safe redirect target.
pub fn build_log_in_redirect_url(request: &Request) -> Option<String> {
    let path_and_query = request.uri().path_and_query()?.as_str();
    let redirect_target = normalize_redirect_url(path_and_query)?;

    match serde_urlencoded::to_string([("redirect_url", &redirect_target)]) {
        Ok(param) => Some(format!("{LOG_IN_VIEW}?{param}")),
        Err(error) => {
            error!("Could not encode redirect URL {redirect_target}: {error}");
            None
        }
    }
}
