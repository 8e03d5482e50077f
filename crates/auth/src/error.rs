/// Failure of the account store itself, as opposed to a missing record.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("record conflicts with an existing one")]
    Conflict,
}

/// Why a username + password pair was not accepted.
///
/// Unknown usernames and wrong passwords collapse into one variant so the
/// caller cannot tell which accounts exist.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("incorrect username or password")]
    UnknownOrBadPassword,
    #[error("account store unavailable")]
    StoreUnavailable(#[source] StoreError),
}

/// Why a protected request was turned away.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("missing bearer credential")]
    MissingCredential,
    #[error("invalid or expired token")]
    Invalid,
    #[error("token identity no longer exists")]
    IdentityGone,
    #[error("account store unavailable")]
    StoreUnavailable(#[source] StoreError),
}

/// Startup configuration that makes the process unable to serve.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("signing secret is missing or empty")]
    MissingSecret,
}
