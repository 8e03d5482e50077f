use super::Hashword;
use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;
use std::sync::LazyLock;

/// Burned on unknown usernames so a miss costs as much as a wrong password.
static DECOY: LazyLock<Option<Hashword>> = LazyLock::new(|| hash("decoy-password").ok());

fn salt() -> Result<SaltString, argon2::password_hash::Error> {
    use rand::Rng;
    let ref mut bytes = [0u8; 16];
    rand::rng().fill(bytes);
    SaltString::encode_b64(bytes)
}

pub fn hash(password: &str) -> Result<Hashword, argon2::password_hash::Error> {
    Argon2::default()
        .hash_password(password.as_bytes(), &salt()?)
        .map(|h| Hashword::from(h.to_string()))
}

pub fn verify(password: &str, hashword: &Hashword) -> bool {
    PasswordHash::new(hashword.as_str())
        .ok()
        .as_ref()
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), hash)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Runs a full verification against a throwaway hash. Always false.
pub fn decoy(password: &str) -> bool {
    DECOY
        .as_ref()
        .map(|hash| verify(password, hash))
        .map(|_| false)
        .unwrap_or(false)
}
