use thiserror::Error;

/// Password strength policy applied before hashing.
///
/// Checked on signup only. Stored credentials may predate policy changes, so
/// the login path never re-validates them.
pub struct PasswordPolicy;

/// A single broken policy rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyRule {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must contain at least one digit")]
    MissingDigit,

    #[error("Password must contain at least one symbol")]
    MissingSymbol,
}

impl PolicyRule {
    /// Stable wire identifier for this rule.
    pub fn code(&self) -> &'static str {
        match self {
            PolicyRule::TooShort { .. } => "password_too_short",
            PolicyRule::TooLong { .. } => "password_too_long",
            PolicyRule::MissingUppercase => "password_missing_uppercase",
            PolicyRule::MissingLowercase => "password_missing_lowercase",
            PolicyRule::MissingDigit => "password_missing_digit",
            PolicyRule::MissingSymbol => "password_missing_symbol",
        }
    }
}

/// Every rule the password broke, in check order.
///
/// Carries all violations at once so signup clients can surface the full
/// list instead of fixing one rule per round trip.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Password does not meet policy: {}", .reasons.iter().map(|r| r.code()).collect::<Vec<_>>().join(", "))]
pub struct PolicyViolations {
    pub reasons: Vec<PolicyRule>,
}

impl PasswordPolicy {
    const MIN_LENGTH: usize = 12;
    // Some hashing primitives truncate or reject inputs past 72 bytes.
    // Enforce the bound explicitly rather than relying on silent truncation.
    const MAX_LENGTH: usize = 72;

    /// Create a new password policy instance.
    pub fn new() -> Self {
        Self
    }

    /// Validate a raw password against every rule.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to check
    ///
    /// # Errors
    /// * `PolicyViolations` - One entry per broken rule
    pub fn validate(&self, password: &str) -> Result<(), PolicyViolations> {
        let mut reasons = Vec::new();

        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            reasons.push(PolicyRule::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        } else if length > Self::MAX_LENGTH {
            reasons.push(PolicyRule::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        let mut has_upper = false;
        let mut has_lower = false;
        let mut has_digit = false;
        let mut has_symbol = false;
        for ch in password.chars() {
            if ch.is_uppercase() {
                has_upper = true;
            } else if ch.is_lowercase() {
                has_lower = true;
            } else if ch.is_numeric() {
                has_digit = true;
            } else if !ch.is_whitespace() {
                has_symbol = true;
            }
        }

        if !has_upper {
            reasons.push(PolicyRule::MissingUppercase);
        }
        if !has_lower {
            reasons.push(PolicyRule::MissingLowercase);
        }
        if !has_digit {
            reasons.push(PolicyRule::MissingDigit);
        }
        if !has_symbol {
            reasons.push(PolicyRule::MissingSymbol);
        }

        if reasons.is_empty() {
            Ok(())
        } else {
            Err(PolicyViolations { reasons })
        }
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new()
    }
}
