use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::ports::AccountRepository;

/// In-memory account store.
///
/// Deterministic stand-in for the Postgres repository. The duplicate-email
/// check and the insert happen under one write lock, mirroring the database
/// constraint resolving concurrent signups.
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<Uuid, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        if accounts.values().any(|a| a.email == account.email) {
            return Err(AccountError::EmailAlreadyExists(
                account.email.as_str().to_string(),
            ));
        }

        accounts.insert(account.id.0, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        Ok(accounts.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, AccountError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        Ok(accounts.values().find(|a| a.email == *email).cloned())
    }
}
