//! Session token claims

use serde::{Deserialize, Serialize};

/// Claims carried in the session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Email of the authenticated user
    pub email: String,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
}

impl SessionClaims {
    /// True when the claims belong to `email` (emails compare case-insensitively)
    pub fn is_subject(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_subject_ignores_case() {
        let claims = SessionClaims {
            email: "Curator@Example.com".to_string(),
            iat: 0,
            exp: 0,
        };
        assert!(claims.is_subject("curator@example.com"));
        assert!(!claims.is_subject("other@example.com"));
    }
}
