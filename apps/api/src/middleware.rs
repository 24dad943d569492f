use arena_application::{DenyReason, RouteDecision};
use arena_core::AppError;
use arena_domain::Principal;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;
use url::form_urlencoded;

use crate::api_config::RedirectTargets;
use crate::error::ApiError;
use crate::state::AppState;

/// Cookie carrying the session token for browser clients.
pub const SESSION_COOKIE_NAME: &str = "arena_session";

/// Caller resolved by [`route_guard`]. `None` for anonymous requests.
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Option<Principal>);

/// Resolves the caller and enforces route rules before any handler runs.
pub async fn route_guard(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let principal = state
        .session_service
        .resolve_principal(session_token(request.headers()))
        .await;

    let path = request.uri().path().to_owned();
    match state
        .route_protector
        .check(path.as_str(), principal.as_ref().map(Principal::role))
    {
        RouteDecision::Allow => {
            request.extensions_mut().insert(CurrentPrincipal(principal));
            next.run(request).await
        }
        RouteDecision::Deny(reason) => {
            debug!(path = %path, ?reason, "route guard refused request");
            denied_response(&state.redirects, path.as_str(), reason)
        }
    }
}

fn denied_response(redirects: &RedirectTargets, path: &str, reason: DenyReason) -> Response {
    if is_api_path(path) {
        let error = match reason {
            DenyReason::Unauthenticated => {
                AppError::Unauthorized("authentication required".to_owned())
            }
            DenyReason::Forbidden => {
                AppError::Forbidden(format!("role may not access '{path}'"))
            }
        };
        return ApiError(error).into_response();
    }

    match reason {
        DenyReason::Unauthenticated => {
            Redirect::to(login_redirect_target(redirects.login_path.as_str(), path).as_str())
                .into_response()
        }
        DenyReason::Forbidden => {
            Redirect::to(redirects.access_denied_path.as_str()).into_response()
        }
    }
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

fn login_redirect_target(login_path: &str, original_path: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(original_path.as_bytes()).collect();
    format!("{login_path}?redirect={encoded}")
}

/// Reads the session token from a bearer header, falling back to the session cookie.
fn session_token(headers: &HeaderMap) -> Option<&str> {
    bearer_token(headers).or_else(|| session_cookie(headers))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("bearer")
        .then(|| token.trim())
        .filter(|token| !token.is_empty())
}

fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE_NAME)
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, header};
    use proptest::prelude::*;

    use super::{SESSION_COOKIE_NAME, is_api_path, login_redirect_target, session_token};

    fn headers(pairs: &[(header::HeaderName, &'static str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.append(name.clone(), HeaderValue::from_static(value));
        }
        headers
    }

    #[test]
    fn bearer_header_wins_over_cookie() {
        let headers = headers(&[
            (header::AUTHORIZATION, "Bearer header-token"),
            (header::COOKIE, "arena_session=cookie-token"),
        ]);
        assert_eq!(session_token(&headers), Some("header-token"));
    }

    #[test]
    fn cookie_is_found_among_others() {
        let headers = headers(&[(header::COOKIE, "theme=dark; arena_session=abc123; lang=en")]);
        assert_eq!(session_token(&headers), Some("abc123"));
    }

    #[test]
    fn other_schemes_and_blank_values_are_ignored() {
        assert_eq!(
            session_token(&headers(&[(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")])),
            None
        );
        assert_eq!(
            session_token(&headers(&[(header::AUTHORIZATION, "Bearer   ")])),
            None
        );
        assert_eq!(
            session_token(&headers(&[(header::COOKIE, "arena_session=")])),
            None
        );
        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[test]
    fn login_redirect_keeps_original_path() {
        assert_eq!(
            login_redirect_target("/login", "/admin/users"),
            "/login?redirect=%2Fadmin%2Fusers"
        );
    }

    #[test]
    fn api_paths_are_recognized_by_segment() {
        assert!(is_api_path("/api/teams"));
        assert!(is_api_path("/api"));
        assert!(!is_api_path("/apis"));
        assert!(!is_api_path("/admin"));
    }

    proptest! {
        #[test]
        fn cookie_token_round_trips(token in "[A-Za-z0-9]{1,64}") {
            let mut headers = HeaderMap::new();
            let cookie = format!("other=1; {SESSION_COOKIE_NAME}={token}");
            let Ok(value) = HeaderValue::from_str(cookie.as_str()) else {
                panic!("generated cookie should be a valid header");
            };
            headers.insert(header::COOKIE, value);

            prop_assert_eq!(session_token(&headers), Some(token.as_str()));
        }
    }
}
