use super::*;
use flix_core::Timestamp;
use std::sync::Arc;

/// Bearer token verification in front of every protected route.
///
/// Each call is independent: decode, check expiry, resolve the embedded
/// account id with a single store lookup. Nothing is remembered between
/// requests, so there is no revocation short of the token expiring.
pub struct Gate {
    crypto: Arc<Crypto>,
    accounts: Arc<dyn Accounts>,
}

impl Gate {
    pub fn new(crypto: Arc<Crypto>, accounts: Arc<dyn Accounts>) -> Self {
        Self { crypto, accounts }
    }

    /// Verifies the raw `Authorization` header value, if any.
    pub async fn verify(&self, header: Option<&str>) -> Result<Account, GateError> {
        self.verify_at(header, flix_core::now()).await
    }

    pub async fn verify_at(
        &self,
        header: Option<&str>,
        now: Timestamp,
    ) -> Result<Account, GateError> {
        let token = Self::bearer(header)?;
        let claims = self.crypto.decode(token).map_err(|e| {
            log::debug!("token rejected: {}", e);
            GateError::Invalid
        })?;
        if claims.expired(now) {
            log::debug!("token rejected: expired for {:?}", claims.username());
            return Err(GateError::Invalid);
        }
        match self.accounts.find_by_id(claims.user()).await {
            Ok(Some(account)) => Ok(account),
            Ok(None) => {
                log::debug!("token rejected: account {} is gone", claims.user());
                Err(GateError::IdentityGone)
            }
            Err(e) => {
                log::error!("identity lookup failed: {}", e);
                Err(GateError::StoreUnavailable(e))
            }
        }
    }

    /// Extracts the token from `Bearer <token>`. The scheme is matched
    /// case-insensitively.
    pub fn bearer(header: Option<&str>) -> Result<&str, GateError> {
        let header = header.ok_or(GateError::MissingCredential)?;
        header
            .trim()
            .split_once(' ')
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, token)| token.trim())
            .filter(|token| !token.is_empty())
            .ok_or(GateError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flix_core::ID;
    use flix_core::Unique;

    const WEEK: Timestamp = 7 * 24 * 60 * 60;

    struct Fixture {
        store: Arc<Memory>,
        crypto: Arc<Crypto>,
        gate: Gate,
        kim: Account,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(Memory::default());
        let crypto = Arc::new(Crypto::new(b"test-secret").unwrap());
        let gate = Gate::new(crypto.clone(), store.clone());
        let kim = Account::new(ID::default(), "kim".into(), "kim@example.com".into(), None);
        let kim = store.register(kim, "secret123").await.unwrap();
        Fixture {
            store,
            crypto,
            gate,
            kim,
        }
    }

    fn header(token: &str) -> String {
        format!("Bearer {}", token)
    }

    #[tokio::test]
    async fn login_issue_verify_expire_scenario() {
        let f = fixture().await;
        let verifier = Verifier::new(f.store.clone());
        let kim = verifier.verify("kim", "secret123").await.unwrap();
        let now = flix_core::now();
        let token = f.crypto.issue_at(&kim, now).unwrap();
        let claims = f.crypto.decode(&token).unwrap();
        assert_eq!(claims.sub, "kim");
        assert_eq!(claims.exp, now + WEEK);
        let bearer = header(&token);
        assert_eq!(f.gate.verify_at(Some(bearer.as_str()), now).await.unwrap(), f.kim);
        assert!(matches!(
            f.gate.verify_at(Some(bearer.as_str()), now + WEEK + 1).await,
            Err(GateError::Invalid)
        ));
        assert!(matches!(
            f.gate.verify(Some(header("garbage").as_str())).await,
            Err(GateError::Invalid)
        ));
        assert!(matches!(
            f.gate.verify(None).await,
            Err(GateError::MissingCredential)
        ));
    }

    #[tokio::test]
    async fn fresh_token_round_trips() {
        let f = fixture().await;
        let token = f.crypto.issue(&f.kim).unwrap();
        let account = f.gate.verify(Some(header(&token).as_str())).await.unwrap();
        assert_eq!(account, f.kim);
    }

    #[tokio::test]
    async fn expired_token_fails_despite_valid_signature() {
        let f = fixture().await;
        let issued = flix_core::now() - WEEK - 1;
        let token = f.crypto.issue_at(&f.kim, issued).unwrap();
        assert!(f.crypto.decode(&token).is_ok());
        assert!(matches!(
            f.gate.verify(Some(header(&token).as_str())).await,
            Err(GateError::Invalid)
        ));
    }

    #[tokio::test]
    async fn foreign_secret_fails() {
        let f = fixture().await;
        let forger = Crypto::new(b"not-our-secret").unwrap();
        let token = forger.issue(&f.kim).unwrap();
        assert!(matches!(
            f.gate.verify(Some(header(&token).as_str())).await,
            Err(GateError::Invalid)
        ));
    }

    #[tokio::test]
    async fn deleted_account_is_identity_gone() {
        let f = fixture().await;
        let token = f.crypto.issue(&f.kim).unwrap();
        f.store.delete(f.kim.id()).await.unwrap();
        assert!(matches!(
            f.gate.verify(Some(header(&token).as_str())).await,
            Err(GateError::IdentityGone)
        ));
    }

    #[tokio::test]
    async fn renamed_account_still_resolves_by_id() {
        let f = fixture().await;
        let token = f.crypto.issue(&f.kim).unwrap();
        let renamed = f.kim.amend(Some("kimberly".into()), None, None);
        f.store.update(&renamed, None).await.unwrap();
        let account = f.gate.verify(Some(header(&token).as_str())).await.unwrap();
        assert_eq!(account.username(), "kimberly");
    }

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

    #[tokio::test]
    async fn store_outage_is_not_a_bad_token() {
        let f = fixture().await;
        let gate = Gate::new(f.crypto.clone(), Arc::new(Down));
        let token = f.crypto.issue(&f.kim).unwrap();
        assert!(matches!(
            gate.verify(Some(header(&token).as_str())).await,
            Err(GateError::StoreUnavailable(StoreError::Unavailable(_)))
        ));
        // bad tokens are rejected before the store is consulted
        assert!(matches!(
            gate.verify(Some(header("a.b").as_str())).await,
            Err(GateError::Invalid)
        ));
        assert!(matches!(gate.verify(None).await, Err(GateError::MissingCredential)));
    }

    #[test]
    fn bearer_header_parsing() {
        assert!(matches!(Gate::bearer(None), Err(GateError::MissingCredential)));
        assert_eq!(Gate::bearer(Some("Bearer abc")).unwrap(), "abc");
        assert_eq!(Gate::bearer(Some("bearer abc")).unwrap(), "abc");
        assert_eq!(Gate::bearer(Some("Bearer   abc ")).unwrap(), "abc");
        assert!(matches!(Gate::bearer(Some("abc")), Err(GateError::Invalid)));
        assert!(matches!(Gate::bearer(Some("Basic abc")), Err(GateError::Invalid)));
        assert!(matches!(Gate::bearer(Some("Bearer ")), Err(GateError::Invalid)));
        assert!(matches!(Gate::bearer(Some("")), Err(GateError::Invalid)));
    }
}
