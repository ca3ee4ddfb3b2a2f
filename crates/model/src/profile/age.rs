use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

/// Profile age value which is in inclusive range `[18, 120]`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(try_from = "i64")]
#[serde(into = "i64")]
pub struct ProfileAge {
    value: u8,
}

impl ProfileAge {
    pub const MIN_AGE: u8 = 18;
    pub const MAX_AGE: u8 = 120;

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Parse age from form input text.
    pub fn parse_input(input: &str) -> Result<Self, AgeError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AgeError::Missing);
        }

        let value = match input.parse::<i64>() {
            Ok(value) => value,
            Err(e) => {
                return match e.kind() {
                    IntErrorKind::PosOverflow => Err(AgeError::TooOld),
                    IntErrorKind::NegOverflow => Err(AgeError::TooYoung),
                    _ => Err(AgeError::NotNumber),
                };
            }
        };

        Self::from_value(value)
    }

    fn from_value(value: i64) -> Result<Self, AgeError> {
        if value < Self::MIN_AGE as i64 {
            Err(AgeError::TooYoung)
        } else if value > Self::MAX_AGE as i64 {
            Err(AgeError::TooOld)
        } else {
            Ok(Self { value: value as u8 })
        }
    }
}

impl TryFrom<i64> for ProfileAge {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_value(value).map_err(|_| {
            format!(
                "Profile age must be in range [{}, {}]",
                Self::MIN_AGE,
                Self::MAX_AGE
            )
        })
    }
}

impl From<ProfileAge> for i64 {
    fn from(value: ProfileAge) -> Self {
        value.value as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeError {
    Missing,
    NotNumber,
    TooYoung,
    TooOld,
}

impl AgeError {
    pub fn message(&self) -> String {
        match self {
            Self::Missing => "Age is required".to_string(),
            Self::NotNumber => "Age must be a whole number".to_string(),
            Self::TooYoung => format!("Minimum age is {}", ProfileAge::MIN_AGE),
            Self::TooOld => format!("Maximum age is {}", ProfileAge::MAX_AGE),
        }
    }
}
