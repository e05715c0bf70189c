use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Person record in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub id: Option<i64>, // assigned by the store
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub gender: String, // free-form
    pub email: String,
}

impl Person {
    #[cfg(test)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        gender: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            gender: gender.into(),
            email: email.into(),
        }
    }

    /// Overwrites every mutable field with the values from `other`; `id` is kept.
    pub fn apply(&mut self, other: Person) {
        self.first_name = other.first_name;
        self.last_name = other.last_name;
        self.address = other.address;
        self.gender = other.gender;
        self.email = other.email;
    }
}
