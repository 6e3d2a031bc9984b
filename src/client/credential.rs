//! Static basic-auth credential for the upstream API.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::HeaderValue;
use std::fmt;

use crate::error::{DevOpsError, Result};

/// Authorization header derived once from a personal access token.
///
/// Azure DevOps takes the token as the password of a basic-auth pair with an
/// empty user name, so the header is `Basic base64(":" + token)`.
#[derive(Clone)]
pub struct Credential {
    header: HeaderValue,
}

impl Credential {
    pub fn from_token(token: &str) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(DevOpsError::MissingToken);
        }

        let encoded = STANDARD.encode(format!(":{}", token));
        let mut header = HeaderValue::from_str(&format!("Basic {}", encoded))?;
        header.set_sensitive(true);

        Ok(Self { header })
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> &HeaderValue {
        &self.header
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_header_encoding() {
        let credential = Credential::from_token("abc").unwrap();
        assert_eq!(credential.header_value().to_str().unwrap(), "Basic OmFiYw==");
        assert!(credential.header_value().is_sensitive());
    }

    #[test]
    fn test_empty_token_rejected() {
        assert!(matches!(
            Credential::from_token("   "),
            Err(DevOpsError::MissingToken)
        ));
    }

    #[test]
    fn test_debug_redacts() {
        let credential = Credential::from_token("abc").unwrap();
        assert_eq!(format!("{:?}", credential), "Credential(<redacted>)");
    }
}
