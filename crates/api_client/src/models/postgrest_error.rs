use crate::models;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostgrestError {
    #[serde(rename = "code", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "details", default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(rename = "hint", default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(rename = "message")]
    pub message: String,
}

impl PostgrestError {
    pub fn new(message: String) -> PostgrestError {
        PostgrestError {
            code: None,
            details: None,
            hint: None,
            message,
        }
    }
}

