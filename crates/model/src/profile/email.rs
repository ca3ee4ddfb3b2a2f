use std::fmt;

use serde::{Deserialize, Serialize};

/// Email address with `local@domain` shape.
///
/// Only the shape is checked: exactly one `@`, non-empty text on both
/// sides and no whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct Email {
    value: String,
}

impl Email {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_valid_shape(value: &str) -> bool {
        if value.chars().any(char::is_whitespace) {
            return false;
        }

        match value.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            }
            None => false,
        }
    }
}

impl TryFrom<String> for Email {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_valid_shape(&value) {
            Ok(Self { value })
        } else {
            Err("Invalid email address".to_string())
        }
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.value
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_addresses() {
        assert!(Email::is_valid_shape("ada@example.com"));
        assert!(Email::is_valid_shape("a@b"));
        assert!(Email::is_valid_shape("first.last+tag@sub.example.org"));
    }

    #[test]
    fn rejects_wrong_at_sign_count() {
        for value in ["", "ada", "ada.example.com", "a@b@c", "@@", "ada@@example.com"] {
            assert!(!Email::is_valid_shape(value), "{value}");
        }
    }

    #[test]
    fn rejects_empty_segments() {
        assert!(!Email::is_valid_shape("@example.com"));
        assert!(!Email::is_valid_shape("ada@"));
        assert!(!Email::is_valid_shape("@"));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(!Email::is_valid_shape("ada lovelace@example.com"));
        assert!(!Email::is_valid_shape("ada@example .com"));
    }

    #[test]
    fn try_from_keeps_value() {
        let email = Email::try_from("ada@example.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "ada@example.com");
        assert!(Email::try_from("nope".to_string()).is_err());
    }
}
