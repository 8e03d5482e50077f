//! Credential verification and stateless bearer-token gating.
//!
//! JWT-based authentication with Argon2 password hashing. A login runs the
//! [`Verifier`] and hands the resulting [`Account`] to [`Crypto::issue`];
//! every protected request afterwards passes the [`Gate`], which checks the
//! token's signature and expiry and resolves it back to a live account.
//! Tokens carry no server-side state, so they cannot be revoked before they
//! expire.
//!
//! ## Identity
//!
//! - [`Account`] — Registered user
//! - [`Hashword`] — Stored Argon2 password credential
//! - [`Accounts`] — Account store boundary
//! - [`Memory`] — In-process account store
//!
//! ## Security
//!
//! - [`Verifier`] — Username + password check
//! - [`Crypto`] — JWT signing and decoding
//! - [`Claims`] — JWT payload structure
//! - [`Gate`] — Bearer token verification
//! - [`password`] — Argon2 hashing and verification
mod account;
mod accounts;
mod claims;
mod crypto;
mod dto;
mod error;
mod gate;
mod memory;
pub mod password;
mod verifier;

pub use account::*;
pub use accounts::*;
pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use error::*;
pub use gate::*;
pub use memory::*;
pub use verifier::*;

#[cfg(feature = "database")]
mod repository;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
