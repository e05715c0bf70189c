#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("No records found for this ID: {0}")]
    NotFound(i64),

    #[error("No records found: person has no ID")]
    MissingId,

    #[error("No records found for name: {first_name} {last_name}")]
    NotFoundByName {
        first_name: String,
        last_name: String,
    },

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn duplicate_email(email: &str) -> Self {
        Self::Conflict(format!("Person already exists with given e-mail: {}", email))
    }
}
