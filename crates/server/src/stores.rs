use flix_auth::Account;
use flix_auth::Accounts;
use flix_auth::Memory;
use flix_catalog::Catalog;
use flix_catalog::Favorite;
use flix_catalog::Library;
use flix_catalog::Movie;
use flix_database::migrate;
use std::sync::Arc;

/// The two store boundaries the routes depend on.
#[derive(Clone)]
pub struct Stores {
    pub accounts: Arc<dyn Accounts>,
    pub catalog: Arc<dyn Catalog>,
}

impl Stores {
    /// Postgres when a URL is given (tables migrated and an empty catalog
    /// stocked on the way in), in-memory stores seeded with the same
    /// classics otherwise.
    pub async fn connect(url: Option<&str>) -> anyhow::Result<Self> {
        match url {
            Some(url) => {
                let client = flix_database::db(url).await?;
                migrate::<Account>(&client).await?;
                migrate::<Movie>(&client).await?;
                migrate::<Favorite>(&client).await?;
                flix_catalog::stock(&*client).await?;
                Ok(Self {
                    accounts: client.clone(),
                    catalog: client,
                })
            }
            None => {
                log::warn!("no database configured, serving from memory");
                Ok(Self::memory())
            }
        }
    }
    pub fn memory() -> Self {
        Self {
            accounts: Arc::new(Memory::default()),
            catalog: Arc::new(Library::classics()),
        }
    }
}
