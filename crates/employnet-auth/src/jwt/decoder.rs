//! JWT token validation against the identity provider's shared secret.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use employnet_core::config::auth::AuthConfig;
use employnet_core::error::AppError;
use employnet_core::result::AppResult;

use super::claims::Claims;

/// Validates bearer tokens issued by the identity provider.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;
        validation.set_issuer(&[config.issuer.as_str()]);
        if config.audience.is_empty() {
            validation.validate_aud = false;
        } else {
            validation.set_audience(&[config.audience.as_str()]);
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks signature validity, expiration, and issuer (plus audience
    /// when one is configured).
    pub fn decode_access_token(&self, token: &str) -> AppResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                        AppError::authentication("Token issuer not recognized")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                        AppError::authentication("Token audience not recognized")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            issuer: "https://auth.test".to_string(),
            audience: String::new(),
            leeway_seconds: 5,
            provider_base_url: "https://api.auth.test/v1".to_string(),
            provider_api_key: String::new(),
            provider_timeout_seconds: 5,
        }
    }

    fn make_token(secret: &str, iss: &str, exp_offset: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "auth0|abc123".to_string(),
            email: "member@example.com".to_string(),
            name: Some("Test Member".to_string()),
            iat: now,
            exp: now + exp_offset,
            iss: iss.to_string(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_decodes() {
        let decoder = JwtDecoder::new(&test_config());
        let token = make_token("test-secret", "https://auth.test", 3600);
        let claims = decoder.decode_access_token(&token).unwrap();
        assert_eq!(claims.sub, "auth0|abc123");
        assert_eq!(claims.email, "member@example.com");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let decoder = JwtDecoder::new(&test_config());
        let token = make_token("other-secret", "https://auth.test", 3600);
        let err = decoder.decode_access_token(&token).unwrap_err();
        assert_eq!(err.message, "Invalid token signature");
    }

    #[test]
    fn expired_token_is_rejected() {
        let decoder = JwtDecoder::new(&test_config());
        let token = make_token("test-secret", "https://auth.test", -3600);
        let err = decoder.decode_access_token(&token).unwrap_err();
        assert_eq!(err.message, "Token has expired");
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let decoder = JwtDecoder::new(&test_config());
        let token = make_token("test-secret", "https://other.test", 3600);
        assert!(decoder.decode_access_token(&token).is_err());
    }
}
