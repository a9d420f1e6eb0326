use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Signs and verifies access tokens with a process-wide secret.
///
/// Uses HS256 (HMAC with SHA-256). The secret comes from configuration and
/// should be at least 32 bytes; it is never hardcoded here.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create an issuer from the configured signing secret.
    ///
    /// # Errors
    /// * `InvalidSecret` - the secret is empty. An unusable secret must stop
    ///   the process from serving traffic, so this fails at construction
    ///   rather than at the first request.
    pub fn new(secret: &[u8]) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::InvalidSecret(
                "signing secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Sign the claims into a compact token string.
    ///
    /// # Errors
    /// * `EncodingFailed` - serialization or signing failed
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// # Errors
    /// * `Expired` - the `exp` claim is in the past
    /// * `Invalid` - bad signature, malformed token, or missing claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            if matches!(e.kind(), ErrorKind::ExpiredSignature) {
                TokenError::Expired
            } else {
                TokenError::Invalid(e.to_string())
            }
        })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_verify() {
        let issuer = TokenIssuer::new(SECRET).expect("Failed to create issuer");

        let claims = Claims::for_identity("user-1", "alice@example.com");
        let token = issuer.issue(&claims).expect("Failed to issue token");
        assert!(!token.is_empty());

        let decoded = issuer.verify(&token).expect("Failed to verify token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_empty_secret_rejected() {
        let result = TokenIssuer::new(b"");
        assert!(matches!(result, Err(TokenError::InvalidSecret(_))));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuer = TokenIssuer::new(SECRET).unwrap();
        let other = TokenIssuer::new(b"another_secret_32_bytes_or_longer!").unwrap();

        let claims = Claims::for_identity("user-1", "alice@example.com");
        let token = issuer.issue(&claims).unwrap();

        let result = other.verify(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_expired_token() {
        let issuer = TokenIssuer::new(SECRET).unwrap();

        let mut claims = Claims::for_identity("user-1", "alice@example.com");
        claims.iat -= 3600;
        claims.exp -= 3600;

        let token = issuer.issue(&claims).unwrap();
        let result = issuer.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_verify_garbage_token() {
        let issuer = TokenIssuer::new(SECRET).unwrap();
        let result = issuer.verify("not.a.token");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }
}
