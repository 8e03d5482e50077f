use super::*;
use flix_core::Timestamp;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

const ACCESS_TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(7 * 24 * 60 * 60);
const ALGORITHM: Algorithm = Algorithm::HS256;

/// Token issuer. Holds the process-wide HS256 secret, which is fixed at
/// construction and shared with the [`Gate`].
pub struct Crypto {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        let mut validation = Validation::new(ALGORITHM);
        validation.set_required_spec_claims(&["exp", "sub"]);
        // expiry is judged by the gate against its own clock
        validation.validate_exp = false;
        validation.leeway = 0;
        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        })
    }
    /// Signs a fresh token for the account, valid for [`Crypto::duration`].
    pub fn issue(&self, account: &Account) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(account, flix_core::now())
    }
    pub fn issue_at(
        &self,
        account: &Account,
        now: Timestamp,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        self.encode(&Claims::new(account, now))
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&Header::new(ALGORITHM), claims, &self.encoding)
    }
    /// Checks signature, algorithm and shape. Does not look at expiry.
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
    }
    pub const fn duration() -> std::time::Duration {
        ACCESS_TOKEN_DURATION
    }
}
