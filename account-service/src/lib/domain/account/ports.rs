use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::SignupCommand;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// Runs the password policy, hashes the secret, and persists the record.
    /// Uniqueness of the email is enforced by the store constraint; a
    /// concurrent duplicate signup surfaces as `EmailAlreadyExists` from the
    /// second insert, never as a silent retry.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email, password, and display name
    ///
    /// # Returns
    /// Created account entity
    ///
    /// # Errors
    /// * `WeakPassword` - Password breaks one or more policy rules (all reported)
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Store operation failed
    async fn signup(&self, command: SignupCommand) -> Result<Account, AccountError>;

    /// Retrieve account by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Store operation failed
    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountError>;

    /// Retrieve account by email address.
    ///
    /// The stored password policy is NOT re-run here; existing credentials
    /// may predate policy changes.
    ///
    /// # Errors
    /// * `NotFound` - No account with this email
    /// * `DatabaseError` - Store operation failed
    async fn get_account_by_email(&self, email: &EmailAddress) -> Result<Account, AccountError>;
}

/// Persistence operations for the account aggregate.
///
/// Implementations perform a single fallible round trip per call. No retries
/// happen at this boundary: a transient failure or a duplicate insert must
/// surface immediately to the caller.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Store rejected the insert on the unique email constraint
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve account by identifier.
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;

    /// Retrieve account by email address.
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, AccountError>;
}
