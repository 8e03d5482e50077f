use super::*;
use flix_auth::Account;
use flix_auth::StoreError;
use flix_core::ID;

/// Store boundary for movies and favorites.
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    async fn movies(&self) -> Result<Vec<Movie>, StoreError>;
    /// Exact title match.
    async fn movie(&self, title: &str) -> Result<Option<Movie>, StoreError>;
    async fn genre(&self, name: &str) -> Result<Option<Genre>, StoreError>;
    async fn director(&self, name: &str) -> Result<Option<Director>, StoreError>;
    /// Adds a movie. A taken title yields [`StoreError::Conflict`].
    async fn insert(&self, movie: &Movie) -> Result<(), StoreError>;
    async fn favorites(&self, user: ID<Account>) -> Result<Vec<ID<Movie>>, StoreError>;
    /// Idempotent. Returns false when the movie does not exist.
    async fn favorite(&self, user: ID<Account>, movie: ID<Movie>) -> Result<bool, StoreError>;
    /// Returns false when the movie was not a favorite.
    async fn unfavorite(&self, user: ID<Account>, movie: ID<Movie>) -> Result<bool, StoreError>;
    /// Drops every favorite of a deregistered user.
    async fn forget(&self, user: ID<Account>) -> Result<(), StoreError>;
}
