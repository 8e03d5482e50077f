use super::*;
use flix_core::ID;
use flix_core::Timestamp;
use flix_core::Unique;

/// JWT payload. `sub` is the username; `uid` is what the gate resolves.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: String,
    pub uid: uuid::Uuid,
    pub iat: Timestamp,
    pub exp: Timestamp,
}

impl Claims {
    pub fn new(account: &Account, now: Timestamp) -> Self {
        Self {
            sub: account.username().to_string(),
            uid: account.id().inner(),
            iat: now,
            exp: now + Crypto::duration().as_secs() as Timestamp,
        }
    }
    /// Valid strictly before `exp`.
    pub fn expired(&self, now: Timestamp) -> bool {
        now >= self.exp
    }
    pub fn user(&self) -> ID<Account> {
        ID::from(self.uid)
    }
    pub fn username(&self) -> &str {
        &self.sub
    }
}
