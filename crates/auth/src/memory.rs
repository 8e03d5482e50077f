use super::*;
use flix_core::ID;
use flix_core::Unique;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process account store, for tests and database-less runs.
#[derive(Default)]
pub struct Memory {
    users: RwLock<HashMap<ID<Account>, (Account, Hashword)>>,
}

impl Memory {
    /// Registers an account with a freshly hashed password.
    pub async fn register(&self, account: Account, password: &str) -> Result<Account, StoreError> {
        let hashword =
            password::hash(password).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        self.create(&account, &hashword).await?;
        Ok(account)
    }
}

#[async_trait::async_trait]
impl Accounts for Memory {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<(Account, Hashword)>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|(account, _)| account.username() == username)
            .cloned())
    }

    async fn find_by_id(&self, id: ID<Account>) -> Result<Option<Account>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .get(&id)
            .map(|(account, _)| account.clone()))
    }

    async fn create(&self, account: &Account, hashword: &Hashword) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&account.id())
            || users.values().any(|(a, _)| a.username() == account.username())
        {
            return Err(StoreError::Conflict);
        }
        users.insert(account.id(), (account.clone(), hashword.clone()));
        Ok(())
    }

    async fn update(
        &self,
        account: &Account,
        hashword: Option<&Hashword>,
    ) -> Result<bool, StoreError> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|(a, _)| a.id() != account.id() && a.username() == account.username())
        {
            return Err(StoreError::Conflict);
        }
        match users.get_mut(&account.id()) {
            None => Ok(false),
            Some(entry) => {
                entry.0 = account.clone();
                if let Some(hashword) = hashword {
                    entry.1 = hashword.clone();
                }
                Ok(true)
            }
        }
    }

    async fn delete(&self, id: ID<Account>) -> Result<bool, StoreError> {
        Ok(self.users.write().await.remove(&id).is_some())
    }
}
