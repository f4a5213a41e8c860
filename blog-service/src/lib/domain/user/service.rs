use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        // Only the digest is ever handed to the repository
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFoundByEmail(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
        }
    }

    #[tokio::test]
    async fn test_register_user_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.name == "Nicola"
                    && user.email.as_str() == "nicola@example.com"
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository));

        let command = CreateUserCommand {
            name: "Nicola".to_string(),
            email: EmailAddress::new("nicola@example.com".to_string()).unwrap(),
            password: "pass_word!".to_string(),
        };

        let user = service.register_user(command).await.unwrap();
        assert_eq!(user.name, "Nicola");
        // The plaintext never reaches storage
        assert_ne!(user.password_hash, "pass_word!");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_register_user_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository));

        let command = CreateUserCommand {
            name: "Nicola".to_string(),
            email: EmailAddress::new("nicola@example.com".to_string()).unwrap(),
            password: "pass_word!".to_string(),
        };

        let result = service.register_user(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user(&UserId::new()).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_user_by_email_success() {
        let mut repository = MockTestUserRepository::new();

        let email = EmailAddress::new("nicola@example.com".to_string()).unwrap();
        let stored = User {
            id: UserId::new(),
            name: "Nicola".to_string(),
            email: email.clone(),
            password_hash: "$argon2id$test_hash".to_string(),
            created_at: Utc::now(),
        };

        let returned = stored.clone();
        let expected = email.clone();
        repository
            .expect_find_by_email()
            .withf(move |e| *e == expected)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = UserService::new(Arc::new(repository));

        let user = service.get_user_by_email(&email).await.unwrap();
        assert_eq!(user.email, email);
    }

    #[tokio::test]
    async fn test_get_user_by_email_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let email = EmailAddress::new("ghost@example.com".to_string()).unwrap();
        let result = service.get_user_by_email(&email).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::NotFoundByEmail(_)
        ));
    }
}
