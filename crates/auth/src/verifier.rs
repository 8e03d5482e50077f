use super::*;
use std::sync::Arc;

/// Checks a username + password pair against the account store.
pub struct Verifier {
    accounts: Arc<dyn Accounts>,
}

impl Verifier {
    pub fn new(accounts: Arc<dyn Accounts>) -> Self {
        Self { accounts }
    }

    /// One lookup by exact username, then an Argon2 comparison. Unknown
    /// users and bad passwords are indistinguishable to the caller; a
    /// store failure is reported separately.
    pub async fn verify(&self, username: &str, password: &str) -> Result<Account, CredentialError> {
        match self.accounts.find_by_username(username).await {
            Err(e) => {
                log::error!("credential lookup failed: {}", e);
                Err(CredentialError::StoreUnavailable(e))
            }
            Ok(None) => {
                password::decoy(password);
                log::debug!("login rejected: unknown user {:?}", username);
                Err(CredentialError::UnknownOrBadPassword)
            }
            Ok(Some((account, hashword))) => match password::verify(password, &hashword) {
                true => Ok(account),
                false => {
                    log::debug!("login rejected: bad password for {:?}", username);
                    Err(CredentialError::UnknownOrBadPassword)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flix_core::ID;

    /// Store whose every call fails.
    struct Down;

    #[async_trait::async_trait]
    impl Accounts for Down {
        async fn find_by_username(
            &self,
            _: &str,
        ) -> Result<Option<(Account, Hashword)>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn find_by_id(&self, _: ID<Account>) -> Result<Option<Account>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn create(&self, _: &Account, _: &Hashword) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn update(&self, _: &Account, _: Option<&Hashword>) -> Result<bool, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn delete(&self, _: ID<Account>) -> Result<bool, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
    }

    async fn with_kim() -> (Verifier, Account) {
        let store = Arc::new(Memory::default());
        let kim = Account::new(ID::default(), "kim".into(), "kim@example.com".into(), None);
        let kim = store.register(kim, "secret123").await.unwrap();
        (Verifier::new(store), kim)
    }

    #[tokio::test]
    async fn correct_password_authenticates() {
        let (verifier, kim) = with_kim().await;
        assert_eq!(verifier.verify("kim", "secret123").await.unwrap(), kim);
    }

    #[tokio::test]
    async fn unknown_user_and_bad_password_look_alike() {
        let (verifier, _) = with_kim().await;
        let unknown = verifier.verify("nobody", "secret123").await.unwrap_err();
        let wrong = verifier.verify("kim", "hunter22").await.unwrap_err();
        assert!(matches!(unknown, CredentialError::UnknownOrBadPassword));
        assert!(matches!(wrong, CredentialError::UnknownOrBadPassword));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn username_match_is_case_sensitive() {
        let (verifier, _) = with_kim().await;
        assert!(matches!(
            verifier.verify("KIM", "secret123").await,
            Err(CredentialError::UnknownOrBadPassword)
        ));
    }

    #[tokio::test]
    async fn store_failure_is_not_unknown_user() {
        let verifier = Verifier::new(Arc::new(Down));
        assert!(matches!(
            verifier.verify("kim", "secret123").await,
            Err(CredentialError::StoreUnavailable(_))
        ));
    }
}
