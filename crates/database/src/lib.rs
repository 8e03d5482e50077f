//! PostgreSQL connectivity and table schemas.
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from a URL
//!
//! ## Schema
//!
//! - [`Schema`] — Table metadata and DDL generation
//! - [`migrate()`] — Idempotent table + index creation
//!
//! ## Table Names
//!
//! Constants for every persistent entity: users, movies, favorites.
mod traits;

pub use traits::*;

use std::sync::Arc;
use tokio_postgres::Client;

/// Establishes a database connection.
///
/// Returns an `Arc<Client>` suitable for sharing across async tasks and
/// actix workers. The connection driver is spawned onto the current runtime
/// and logs if it ever terminates.
pub async fn db(url: &str) -> Result<Arc<Client>, PgErr> {
    log::info!("connecting to database");
    let (client, connection) = tokio_postgres::connect(url, tokio_postgres::tls::NoTls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    Ok(Arc::new(client))
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for movie favorites (user ↔ movie).
#[rustfmt::skip]
pub const FAVORITES: &str = "favorites";
/// Table for catalog movies with embedded genre and director.
#[rustfmt::skip]
pub const MOVIES:    &str = "movies";
/// Table for registered user accounts.
#[rustfmt::skip]
pub const USERS:     &str = "users";
