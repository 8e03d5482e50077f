use super::*;
use flix_auth::Account;
use flix_auth::StoreError;
use flix_core::ID;
use flix_core::Unique;
use std::collections::BTreeSet;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process catalog. Movies keep insertion order.
#[derive(Default)]
pub struct Library {
    movies: RwLock<Vec<Movie>>,
    favorites: RwLock<HashMap<ID<Account>, BTreeSet<ID<Movie>>>>,
}

impl Library {
    /// Catalog preloaded with a handful of classics.
    pub fn classics() -> Self {
        Self {
            movies: RwLock::new(super::classics()),
            favorites: RwLock::default(),
        }
    }
}

#[async_trait::async_trait]
impl Catalog for Library {
    async fn movies(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.movies.read().await.clone())
    }

    async fn movie(&self, title: &str) -> Result<Option<Movie>, StoreError> {
        Ok(self
            .movies
            .read()
            .await
            .iter()
            .find(|m| m.title() == title)
            .cloned())
    }

    async fn genre(&self, name: &str) -> Result<Option<Genre>, StoreError> {
        Ok(self
            .movies
            .read()
            .await
            .iter()
            .map(Movie::genre)
            .find(|g| g.name == name)
            .cloned())
    }

    async fn director(&self, name: &str) -> Result<Option<Director>, StoreError> {
        Ok(self
            .movies
            .read()
            .await
            .iter()
            .map(Movie::director)
            .find(|d| d.name == name)
            .cloned())
    }

    async fn insert(&self, movie: &Movie) -> Result<(), StoreError> {
        let mut movies = self.movies.write().await;
        if movies
            .iter()
            .any(|m| m.id() == movie.id() || m.title() == movie.title())
        {
            return Err(StoreError::Conflict);
        }
        movies.push(movie.clone());
        Ok(())
    }

    async fn favorites(&self, user: ID<Account>) -> Result<Vec<ID<Movie>>, StoreError> {
        Ok(self
            .favorites
            .read()
            .await
            .get(&user)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default())
    }

    async fn favorite(&self, user: ID<Account>, movie: ID<Movie>) -> Result<bool, StoreError> {
        if !self.movies.read().await.iter().any(|m| m.id() == movie) {
            return Ok(false);
        }
        self.favorites
            .write()
            .await
            .entry(user)
            .or_default()
            .insert(movie);
        Ok(true)
    }

    async fn unfavorite(&self, user: ID<Account>, movie: ID<Movie>) -> Result<bool, StoreError> {
        Ok(self
            .favorites
            .write()
            .await
            .get_mut(&user)
            .map(|set| set.remove(&movie))
            .unwrap_or(false))
    }

    async fn forget(&self, user: ID<Account>) -> Result<(), StoreError> {
        self.favorites.write().await.remove(&user);
        Ok(())
    }
}
