use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::SignupCommand;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;

/// Domain service implementation for account operations.
///
/// Concrete implementation of AccountServicePort with dependency injection.
pub struct AccountService<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
    password_hasher: auth::PasswordHasher,
    password_policy: auth::PasswordPolicy,
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    /// Create a new account service with an injected repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
            password_policy: auth::PasswordPolicy::default(),
        }
    }
}

#[async_trait]
impl<R> AccountServicePort for AccountService<R>
where
    R: AccountRepository,
{
    async fn signup(&self, command: SignupCommand) -> Result<Account, AccountError> {
        // Policy runs before any hashing work; all broken rules are reported.
        self.password_policy.validate(&command.password)?;

        let password_hash = self.password_hasher.hash(&command.password)?;

        let now = Utc::now();
        let account = Account {
            id: AccountId::new(),
            email: command.email,
            password_hash,
            display_name: command.display_name,
            created_at: now,
            updated_at: now,
        };

        // The store constraint is the sole arbiter of email uniqueness; a
        // race between two signups resolves as the second insert failing.
        self.repository.create(account).await
    }

    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id.to_string()))
    }

    async fn get_account_by_email(&self, email: &EmailAddress) -> Result<Account, AccountError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(AccountError::NotFound(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::account::models::DisplayName;

    // Define mocks in the test module using mockall
    mock! {
        pub TestAccountRepository {}

        #[async_trait]
        impl AccountRepository for TestAccountRepository {
            async fn create(&self, account: Account) -> Result<Account, AccountError>;
            async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, AccountError>;
        }
    }

    fn signup_command(email: &str, password: &str) -> SignupCommand {
        SignupCommand::new(
            EmailAddress::new(email.to_string()).unwrap(),
            password.to_string(),
            DisplayName::new("Nicola".to_string()).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_signup_success() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_create()
            .withf(|account| {
                account.email.as_str() == "nicola@example.com"
                    && account.password_hash.starts_with("$argon2")
                    && account.password_hash != "Test1234!@#$"
            })
            .times(1)
            .returning(|account| Ok(account));

        let service = AccountService::new(Arc::new(repository));

        let result = service
            .signup(signup_command("nicola@example.com", "Test1234!@#$"))
            .await;
        assert!(result.is_ok());

        let account = result.unwrap();
        assert_eq!(account.email.as_str(), "nicola@example.com");
        assert_eq!(account.display_name.as_str(), "Nicola");
        // Secret is stored hashed, never as plaintext
        assert!(account.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_signup_weak_password_reports_all_reasons() {
        let mut repository = MockTestAccountRepository::new();
        // Policy rejection happens before the store is touched
        repository.expect_create().times(0);

        let service = AccountService::new(Arc::new(repository));

        let result = service
            .signup(signup_command("nicola@example.com", "password"))
            .await;

        match result {
            Err(AccountError::WeakPassword(violations)) => {
                let codes: Vec<_> = violations.reasons.iter().map(|r| r.code()).collect();
                assert!(codes.contains(&"password_too_short"));
                assert!(codes.contains(&"password_missing_uppercase"));
                assert!(codes.contains(&"password_missing_digit"));
                assert!(codes.contains(&"password_missing_symbol"));
            }
            other => panic!("Expected WeakPassword, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let mut repository = MockTestAccountRepository::new();

        repository.expect_create().times(1).returning(|account| {
            Err(AccountError::EmailAlreadyExists(
                account.email.as_str().to_string(),
            ))
        });

        let service = AccountService::new(Arc::new(repository));

        let result = service
            .signup(signup_command("nicola@example.com", "Test1234!@#$"))
            .await;
        assert!(matches!(
            result.unwrap_err(),
            AccountError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_get_account_success() {
        let mut repository = MockTestAccountRepository::new();

        let account_id = AccountId::new();
        let expected_account = Account {
            id: account_id,
            email: EmailAddress::new("nicola@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            display_name: DisplayName::new("Nicola".to_string()).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let returned_account = expected_account.clone();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == account_id)
            .times(1)
            .returning(move |_| Ok(Some(returned_account.clone())));

        let service = AccountService::new(Arc::new(repository));

        let account = service.get_account(&account_id).await.unwrap();
        assert_eq!(account.id, account_id);
        assert_eq!(account.email.as_str(), "nicola@example.com");
    }

    #[tokio::test]
    async fn test_get_account_not_found() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = AccountService::new(Arc::new(repository));

        let result = service.get_account(&AccountId::new()).await;
        assert!(matches!(result.unwrap_err(), AccountError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_account_by_email_not_found() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = AccountService::new(Arc::new(repository));

        let email = EmailAddress::new("ghost@example.com".to_string()).unwrap();
        let result = service.get_account_by_email(&email).await;
        assert!(matches!(result.unwrap_err(), AccountError::NotFound(_)));
    }
}
