use std::sync::Arc;
use tracing::{error, info, warn};
use validator::Validate;
use zeroize::Zeroizing;

use crate::domain::entities::user::{Credentials, User};
use crate::domain::errors::{field_errors, CredentialError};
use crate::domain::repositories::user_repository::UserRepository;

/// Registration and password checks on top of a `UserRepository`.
///
/// bcrypt hashing and verification run on tokio's blocking pool.
pub struct CredentialService {
    users: Arc<dyn UserRepository>,
    hash_cost: u32,
}

impl CredentialService {
    pub fn new(users: Arc<dyn UserRepository>, hash_cost: u32) -> Self {
        Self { users, hash_cost }
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<User, CredentialError> {
        credentials
            .validate()
            .map_err(|e| CredentialError::Validation(field_errors(&e)))?;

        if self.users.find_by_email(&credentials.email).await.is_some() {
            warn!("Signup rejected: email already registered");
            return Err(CredentialError::DuplicateEmail(credentials.email.clone()));
        }

        let password = Zeroizing::new(credentials.password.clone());
        let cost = self.hash_cost;
        let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password.as_bytes(), cost))
            .await
            .map_err(|e| CredentialError::Hashing(e.to_string()))?
            .map_err(|e| CredentialError::Hashing(e.to_string()))?;

        // The repository re-checks uniqueness under its write lock.
        let user = self.users.insert(&credentials.email, password_hash).await?;
        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.find_by_email(email).await
    }

    pub async fn verify_password(&self, user: &User, candidate: &str) -> bool {
        let candidate = Zeroizing::new(candidate.to_string());
        let hash = user.password_hash.clone();

        match tokio::task::spawn_blocking(move || bcrypt::verify(candidate.as_bytes(), &hash)).await {
            Ok(Ok(matches)) => matches,
            Ok(Err(e)) => {
                warn!(user_id = user.id, "Stored password hash unusable: {}", e);
                false
            }
            Err(e) => {
                error!("Password verification task failed: {}", e);
                false
            }
        }
    }

    /// Look up and check a login attempt. Unknown emails and wrong passwords
    /// produce the same error.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, CredentialError> {
        let user = self
            .find_by_email(email)
            .await
            .ok_or(CredentialError::InvalidCredentials)?;

        if self.verify_password(&user, password).await {
            Ok(user)
        } else {
            Err(CredentialError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::InMemoryUserRepository;

    const TEST_COST: u32 = 4;

    fn service() -> CredentialService {
        CredentialService::new(Arc::new(InMemoryUserRepository::new()), TEST_COST)
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let service = service();
        let user = service
            .register(&Credentials::new("trader@example.com", "secret1"))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_ne!(user.password_hash, "secret1");
        assert!(user.password_hash.starts_with("$2"));
    }

    #[tokio::test]
    async fn test_register_validation_errors() {
        let service = service();
        let result = service.register(&Credentials::new("nope", "123")).await;
        match result {
            Err(CredentialError::Validation(errors)) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["email", "password"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = service();
        let creds = Credentials::new("trader@example.com", "secret1");
        service.register(&creds).await.unwrap();

        let again = Credentials::new("trader@example.com", "different-password");
        assert!(matches!(
            service.register(&again).await,
            Err(CredentialError::DuplicateEmail(_))
        ));
    }

    #[tokio::test]
    async fn test_verify_password() {
        let service = service();
        let user = service
            .register(&Credentials::new("trader@example.com", "secret1"))
            .await
            .unwrap();

        assert!(service.verify_password(&user, "secret1").await);
        assert!(!service.verify_password(&user, "secret2").await);
    }

    #[tokio::test]
    async fn test_verify_password_with_corrupt_hash() {
        let user = User {
            id: 1,
            email: "trader@example.com".to_string(),
            password_hash: "not-a-bcrypt-hash".to_string(),
        };
        assert!(!service().verify_password(&user, "secret1").await);
    }

    #[tokio::test]
    async fn test_authenticate() {
        let service = service();
        service
            .register(&Credentials::new("trader@example.com", "secret1"))
            .await
            .unwrap();

        let user = service.authenticate("trader@example.com", "secret1").await.unwrap();
        assert_eq!(user.email, "trader@example.com");

        assert!(matches!(
            service.authenticate("trader@example.com", "wrong").await,
            Err(CredentialError::InvalidCredentials)
        ));
        assert!(matches!(
            service.authenticate("ghost@example.com", "secret1").await,
            Err(CredentialError::InvalidCredentials)
        ));
    }
}
