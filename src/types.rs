//! Core types for hello-birthday

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted username and date-of-birth pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: NaiveDate,
}

impl UserRecord {
    pub fn new(username: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            username: username.into(),
            date_of_birth,
        }
    }
}
