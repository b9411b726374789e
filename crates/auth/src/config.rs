//! Authentication configuration

use timekeeper_common::Environment;

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub environment: Environment,
}
