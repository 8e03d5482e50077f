use super::*;
use flix_core::ID;

/// Account store boundary.
///
/// The verifier and the gate only ever call [`find_by_username`] and
/// [`find_by_id`]; the rest backs registration and profile management.
/// Implemented for the Postgres client and for [`Memory`].
///
/// [`find_by_username`]: Accounts::find_by_username
/// [`find_by_id`]: Accounts::find_by_id
#[async_trait::async_trait]
pub trait Accounts: Send + Sync {
    /// Exact, case-sensitive username match.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<(Account, Hashword)>, StoreError>;
    async fn find_by_id(&self, id: ID<Account>) -> Result<Option<Account>, StoreError>;
    /// Inserts a new account. A taken username yields [`StoreError::Conflict`].
    async fn create(&self, account: &Account, hashword: &Hashword) -> Result<(), StoreError>;
    /// Replaces the stored profile, and the credential when one is given.
    /// Returns false when no account has this id.
    async fn update(
        &self,
        account: &Account,
        hashword: Option<&Hashword>,
    ) -> Result<bool, StoreError>;
    /// Returns false when no account has this id.
    async fn delete(&self, id: ID<Account>) -> Result<bool, StoreError>;
    /// Cheap liveness probe.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
