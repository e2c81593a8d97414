use crate::password::hash_password;
use serde::{Deserialize, Serialize};

/// Account holder. `password` always holds the digest, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i32>, // None for new users before persistence
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Builds an unsaved user, hashing the plaintext password.
    pub fn new(
        first_name: String,
        last_name: String,
        email_address: String,
        plaintext_password: &str,
    ) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            email_address,
            password: hash_password(plaintext_password),
        }
    }

    pub fn with_id(
        id: i32,
        first_name: String,
        last_name: String,
        email_address: String,
        password_digest: String,
    ) -> Self {
        Self {
            id: Some(id),
            first_name,
            last_name,
            email_address,
            password: password_digest,
        }
    }

    pub fn validate(&self) -> Result<(), crate::DomainError> {
        if self.first_name.trim().is_empty() {
            return Err(crate::DomainError::ValidationError("First name cannot be empty".to_string()));
        }

        if self.last_name.trim().is_empty() {
            return Err(crate::DomainError::ValidationError("Last name cannot be empty".to_string()));
        }

        if self.email_address.trim().is_empty() {
            return Err(crate::DomainError::ValidationError("Email address cannot be empty".to_string()));
        }

        Ok(())
    }

    pub fn password_matches(&self, plaintext_password: &str) -> bool {
        self.password == hash_password(plaintext_password)
    }
}
