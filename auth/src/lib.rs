//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure:
//! - Password hashing (Argon2id) and password strength policy
//! - Signed bearer-token issuance and validation
//! - Authentication coordination (verify credentials, issue token)
//!
//! Services inject these pieces at construction with their own signing key,
//! which keeps the library free of ambient state and deterministic in tests.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("correct horse battery").unwrap();
//! assert!(hasher.verify("correct horse battery", &hash).unwrap());
//! assert!(!hasher.verify("wrong password", &hash).unwrap());
//! ```
//!
//! ## Password Policy
//! ```
//! use auth::PasswordPolicy;
//!
//! let policy = PasswordPolicy::default();
//! assert!(policy.validate("Test1234!@#$").is_ok());
//! // Every broken rule is reported, not just the first.
//! let violations = policy.validate("password").unwrap_err();
//! assert!(violations.reasons.len() >= 3);
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue("account-123", Duration::hours(24)).unwrap();
//! let claims = codec.parse(&token).unwrap();
//! assert_eq!(claims.sub, "account-123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Signup: hash password for storage
//! let hash = auth.hash_password("Test1234!@#$").unwrap();
//!
//! // Login: verify and issue a token
//! let result = auth
//!     .authenticate("Test1234!@#$", &hash, "account-123", Duration::hours(24))
//!     .unwrap();
//!
//! // Later requests: validate the presented token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "account-123");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordPolicy;
pub use password::PolicyRule;
pub use password::PolicyViolations;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
