use crate::models;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValentineProfile {
    #[serde(rename = "name")]
    pub name: String,
    /// Min value for this field is 18.
    #[serde(rename = "age")]
    pub age: i64,
    #[serde(rename = "gender")]
    pub gender: models::Gender,
    #[serde(rename = "email")]
    pub email: String,
    #[serde(rename = "interests")]
    pub interests: String,
    #[serde(rename = "lookingFor")]
    pub looking_for: String,
    #[serde(rename = "idealDate", default, skip_serializing_if = "Option::is_none")]
    pub ideal_date: Option<String>,
    #[serde(rename = "dealBreakers", default, skip_serializing_if = "Option::is_none")]
    pub deal_breakers: Option<String>,
}

impl ValentineProfile {
    pub fn new(name: String, age: i64, gender: models::Gender, email: String, interests: String, looking_for: String) -> ValentineProfile {
        ValentineProfile {
            name,
            age,
            gender,
            email,
            interests,
            looking_for,
            ideal_date: None,
            deal_breakers: None,
        }
    }
}

