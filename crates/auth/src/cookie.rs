//! Session cookie construction
//!
//! Production cookies are sent cross-site (frontend and API live on
//! different origins), so they carry `Secure` + `SameSite=None`. Development
//! cookies stay permissive for plain-HTTP localhost setups.

use axum_extra::extract::cookie::{Cookie, SameSite};
use timekeeper_common::Environment;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "token";

/// Build the HTTP-only session cookie carrying a signed token
pub fn build_session_cookie(token: String, environment: Environment) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(environment.is_production())
        .same_site(if environment.is_production() {
            SameSite::None
        } else {
            SameSite::Lax
        })
        .build()
}

/// Build a removal cookie matching the session cookie's attributes
pub fn clear_session_cookie(environment: Environment) -> Cookie<'static> {
    build_session_cookie(String::new(), environment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_cookie_is_secure_cross_site() {
        let cookie = build_session_cookie("abc".to_string(), Environment::Production);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_development_cookie_is_permissive() {
        let cookie = build_session_cookie("abc".to_string(), Environment::Development);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn test_clear_cookie_has_empty_value() {
        let cookie = clear_session_cookie(Environment::Development);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
    }
}
