use chrono::Duration;
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

/// Issues and parses signed bearer tokens.
///
/// HS256 (HMAC with SHA-256) is the only accepted algorithm. Tokens whose
/// header declares any other algorithm are rejected outright, even if their
/// signature would verify under this key (algorithm-confusion defense).
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a new token codec with a symmetric signing key.
    ///
    /// # Arguments
    /// * `secret` - Pre-shared signing key known only to the server process
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// # Arguments
    /// * `subject` - Account identifier to assert
    /// * `ttl` - Token lifetime
    ///
    /// # Returns
    /// Signed token string carrying `{sub, iat, exp}`
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        self.encode(&Claims::new(subject, ttl))
    }

    /// Encode pre-built claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Parse and validate a token.
    ///
    /// Signature verification comes first; no claim is trusted before it.
    /// Expiry is then checked against the current time with zero leeway, so
    /// an expired token is rejected regardless of a valid signature.
    ///
    /// # Arguments
    /// * `token` - Token string to parse
    ///
    /// # Returns
    /// Validated claims
    ///
    /// # Errors
    /// * `Expired` - `exp` is in the past
    /// * `InvalidSignature` - Signature does not verify under this key, or
    ///   the declared algorithm is not HS256
    /// * `Malformed` - Token structure or payload cannot be decoded
    pub fn parse(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature
                    | ErrorKind::InvalidAlgorithm
                    | ErrorKind::InvalidAlgorithmName => TokenError::InvalidSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
