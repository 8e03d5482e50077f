//! Movie catalog and per-user favorites.
//!
//! Read-mostly collection behind the [`Catalog`] store boundary, with a
//! Postgres implementation under the `database` feature and an in-process
//! [`Library`] for tests and database-less runs. Every HTTP route here sits
//! behind the auth gate.
//!
//! ## Core Types
//!
//! - [`Movie`] — Catalog entry with embedded [`Genre`] and [`Director`]
//! - [`Catalog`] — Store boundary for movies and favorites
//! - [`Library`] — In-process catalog
//! - [`stock`] — Seeds an empty catalog with the [`classics`]
mod catalog;
mod classics;
mod library;
mod movie;

pub use catalog::*;
pub use classics::*;
pub use library::*;
pub use movie::*;

#[cfg(feature = "database")]
mod repository;
#[cfg(feature = "database")]
pub use repository::*;

#[cfg(feature = "server")]
pub mod handlers;
