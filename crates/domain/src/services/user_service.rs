use crate::entities::User;
use crate::errors::DomainError;
use crate::repositories::UserRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// User Service - account creation and password authentication
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Checks a plaintext password against the stored digest and returns the
    /// user's id. Blank input is rejected before the store is queried.
    pub async fn authenticate(&self, email_address: &str, password: &str) -> Result<i32, DomainError> {
        if email_address.trim().is_empty() || password.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Email address and password are required".to_string(),
            ));
        }

        let user = self
            .user_repository
            .find_by_email_address(email_address)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(email_address.to_string()))?;

        if !user.password_matches(password) {
            debug!(email_address, "password mismatch");
            return Err(DomainError::InvalidCredentials);
        }

        user.id.ok_or_else(|| DomainError::RepositoryError("Stored user has no id".to_string()))
    }

    /// Create a new user and return the assigned id
    pub async fn create_user(
        &self,
        first_name: String,
        last_name: String,
        email_address: String,
        password: &str,
    ) -> Result<i32, DomainError> {
        if password.trim().is_empty() {
            return Err(DomainError::ValidationError("Password cannot be empty".to_string()));
        }

        let user = User::new(first_name, last_name, email_address, password);
        user.validate()?;

        // Check if email already exists
        if self
            .user_repository
            .find_by_email_address(&user.email_address)
            .await?
            .is_some()
        {
            return Err(DomainError::EmailAlreadyExists(user.email_address));
        }

        let saved = self.user_repository.save(&user).await?;
        let id = saved
            .id
            .ok_or_else(|| DomainError::RepositoryError("Saved user has no id".to_string()))?;
        info!(user_id = id, "created user");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::hash_password;
    use crate::repositories::MockUserRepository;
    use rstest::rstest;

    fn stored_user(email: &str, password: &str) -> User {
        User::with_id(
            1,
            "Test".to_string(),
            "User".to_string(),
            email.to_string(),
            hash_password(password),
        )
    }

    #[tokio::test]
    async fn authenticate_returns_user_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email_address()
            .withf(|email| email == "test@example.com")
            .times(1)
            .returning(|email| Ok(Some(stored_user(email, "password123"))));

        let service = UserService::new(Arc::new(repo));
        let id = service
            .authenticate("test@example.com", "password123")
            .await
            .unwrap();
        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn authenticate_unknown_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email_address()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repo));
        let err = service
            .authenticate("missing@example.com", "password123")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::UserNotFound(_)));
    }

    #[tokio::test]
    async fn authenticate_wrong_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email_address()
            .times(1)
            .returning(|email| Ok(Some(stored_user(email, "password123"))));

        let service = UserService::new(Arc::new(repo));
        let err = service
            .authenticate("test@example.com", "wrongpassword")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    #[rstest]
    #[case("", "password123")]
    #[case("test@example.com", "")]
    #[case("   ", "password123")]
    #[tokio::test]
    async fn authenticate_blank_input_skips_store(#[case] email: &str, #[case] password: &str) {
        // No expectations: any repository call would panic.
        let repo = MockUserRepository::new();
        let service = UserService::new(Arc::new(repo));

        let err = service.authenticate(email, password).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn create_user_hashes_password_and_returns_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email_address()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_save()
            .withf(|user| user.password == hash_password("alias?notI") && user.id.is_none())
            .times(1)
            .returning(|user| {
                let mut saved = user.clone();
                saved.id = Some(100);
                Ok(saved)
            });

        let service = UserService::new(Arc::new(repo));
        let id = service
            .create_user(
                "Sue".to_string(),
                "Donym".to_string(),
                "notapseudonym@example.com".to_string(),
                "alias?notI",
            )
            .await
            .unwrap();
        assert_eq!(id, 100);
    }

    #[tokio::test]
    async fn create_user_with_taken_email_does_not_write() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email_address()
            .times(1)
            .returning(|email| Ok(Some(stored_user(email, "password789"))));
        repo.expect_save().never();

        let service = UserService::new(Arc::new(repo));
        let err = service
            .create_user(
                "Emily".to_string(),
                "Johnson".to_string(),
                "emily.johnson@example.com".to_string(),
                "password789",
            )
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "There is an account already associated with emily.johnson@example.com"
        );
    }

    #[tokio::test]
    async fn create_user_rejects_blank_fields() {
        let repo = MockUserRepository::new();
        let service = UserService::new(Arc::new(repo));

        let err = service
            .create_user(String::new(), "Donym".to_string(), "a@b.c".to_string(), "pw")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));

        let err = service
            .create_user("Sue".to_string(), "Donym".to_string(), "a@b.c".to_string(), " ")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }
}
