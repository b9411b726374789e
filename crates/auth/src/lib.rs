//! Authentication gate for the Timekeeper's Archive API
//!
//! Provides HS256 session-token signing and verification, session cookie
//! construction, and an axum extractor that works with any domain state
//! implementing `FromRef<S>` for `AuthConfig`.

mod claims;
mod config;
mod cookie;
mod error;
mod extractors;
mod jwt;

pub use claims::SessionClaims;
pub use config::AuthConfig;
pub use cookie::{build_session_cookie, clear_session_cookie, SESSION_COOKIE};
pub use error::AuthError;
pub use extractors::SessionUser;
pub use jwt::{sign_session, verify_session, SESSION_TTL_SECS};
