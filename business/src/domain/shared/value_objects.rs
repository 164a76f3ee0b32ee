use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").ok());

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("shared.invalid_email")]
pub struct InvalidEmail;

/// A syntactically valid, lower-cased email address.
///
/// Emails are unique for users and farmers, so they are normalised on
/// construction to keep uniqueness case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn parse(value: impl AsRef<str>) -> Result<Self, InvalidEmail> {
        let candidate = value.as_ref().trim().to_lowercase();
        let valid = EMAIL_PATTERN
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(&candidate));
        if !valid {
            return Err(InvalidEmail);
        }
        Ok(Self(candidate))
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_plain_address() {
        let email = Email::parse("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn should_normalise_case_and_whitespace() {
        let email = Email::parse("  User@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn should_reject_missing_at_sign() {
        assert_eq!(Email::parse("user.example.com"), Err(InvalidEmail));
    }

    #[test]
    fn should_reject_missing_domain_dot() {
        assert_eq!(Email::parse("user@localhost"), Err(InvalidEmail));
    }

    #[test]
    fn should_reject_double_at_sign() {
        assert_eq!(Email::parse("a@b@example.com"), Err(InvalidEmail));
    }

    #[test]
    fn should_display_inner_value() {
        let email = Email::parse("farmer@farm.org").unwrap();
        assert_eq!(format!("{}", email), "farmer@farm.org");
    }
}
