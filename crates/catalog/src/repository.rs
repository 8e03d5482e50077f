use super::*;
use flix_auth::Account;
use flix_auth::StoreError;
use flix_core::ID;
use flix_core::Unique;
use flix_database::*;
use tokio_postgres::Client;

/// Join table between users and movies. Rows vanish with either side.
pub struct Favorite;

impl Schema for Favorite {
    fn name() -> &'static str {
        FAVORITES
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            FAVORITES,
            " (
                user_id     UUID NOT NULL REFERENCES ",
            USERS,
            "(id) ON DELETE CASCADE,
                movie_id    UUID NOT NULL REFERENCES ",
            MOVIES,
            "(id) ON DELETE CASCADE,
                PRIMARY KEY (user_id, movie_id)
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_favorites_movie ON ",
            FAVORITES,
            " (movie_id);"
        )
    }
}

const MOVIE_COLUMNS: &str = "id, title, description, \
    genre_name, genre_description, \
    director_name, director_bio, \
    image_path, featured";

fn movie(row: &tokio_postgres::Row) -> Movie {
    Movie::new(
        ID::from(row.get::<_, uuid::Uuid>(0)),
        row.get::<_, String>(1),
        row.get::<_, String>(2),
        Genre {
            name: row.get::<_, String>(3),
            description: row.get::<_, String>(4),
        },
        Director {
            name: row.get::<_, String>(5),
            bio: row.get::<_, String>(6),
        },
        row.get::<_, Option<String>>(7),
        row.get::<_, bool>(8),
    )
}

#[async_trait::async_trait]
impl Catalog for Client {
    async fn movies(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self
            .query(
                const_format::concatcp!(
                    "SELECT ",
                    MOVIE_COLUMNS,
                    " FROM ",
                    MOVIES,
                    " ORDER BY title"
                ),
                &[],
            )
            .await?
            .iter()
            .map(movie)
            .collect())
    }

    async fn movie(&self, title: &str) -> Result<Option<Movie>, StoreError> {
        Ok(self
            .query_opt(
                const_format::concatcp!(
                    "SELECT ",
                    MOVIE_COLUMNS,
                    " FROM ",
                    MOVIES,
                    " WHERE title = $1"
                ),
                &[&title],
            )
            .await?
            .as_ref()
            .map(movie))
    }

    async fn genre(&self, name: &str) -> Result<Option<Genre>, StoreError> {
        Ok(self
            .query_opt(
                const_format::concatcp!(
                    "SELECT genre_name, genre_description FROM ",
                    MOVIES,
                    " WHERE genre_name = $1 LIMIT 1"
                ),
                &[&name],
            )
            .await?
            .map(|row| Genre {
                name: row.get(0),
                description: row.get(1),
            }))
    }

    async fn director(&self, name: &str) -> Result<Option<Director>, StoreError> {
        Ok(self
            .query_opt(
                const_format::concatcp!(
                    "SELECT director_name, director_bio FROM ",
                    MOVIES,
                    " WHERE director_name = $1 LIMIT 1"
                ),
                &[&name],
            )
            .await?
            .map(|row| Director {
                name: row.get(0),
                bio: row.get(1),
            }))
    }

    async fn insert(&self, movie: &Movie) -> Result<(), StoreError> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                MOVIES,
                " (",
                MOVIE_COLUMNS,
                ") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"
            ),
            &[
                &movie.id().inner(),
                &movie.title(),
                &movie.description(),
                &movie.genre().name,
                &movie.genre().description,
                &movie.director().name,
                &movie.director().bio,
                &movie.image_path(),
                &movie.featured(),
            ],
        )
        .await
        .map(|_| ())
        .map_err(StoreError::from)
    }

    async fn favorites(&self, user: ID<Account>) -> Result<Vec<ID<Movie>>, StoreError> {
        Ok(self
            .query(
                const_format::concatcp!(
                    "SELECT movie_id FROM ",
                    FAVORITES,
                    " WHERE user_id = $1"
                ),
                &[&user.inner()],
            )
            .await?
            .iter()
            .map(|row| ID::from(row.get::<_, uuid::Uuid>(0)))
            .collect())
    }

    async fn favorite(&self, user: ID<Account>, movie: ID<Movie>) -> Result<bool, StoreError> {
        let exists = self
            .query_opt(
                const_format::concatcp!("SELECT 1 FROM ", MOVIES, " WHERE id = $1"),
                &[&movie.inner()],
            )
            .await?
            .is_some();
        if exists {
            self.execute(
                const_format::concatcp!(
                    "INSERT INTO ",
                    FAVORITES,
                    " (user_id, movie_id) VALUES ($1, $2) ON CONFLICT DO NOTHING"
                ),
                &[&user.inner(), &movie.inner()],
            )
            .await?;
        }
        Ok(exists)
    }

    async fn unfavorite(&self, user: ID<Account>, movie: ID<Movie>) -> Result<bool, StoreError> {
        self.execute(
            const_format::concatcp!(
                "DELETE FROM ",
                FAVORITES,
                " WHERE user_id = $1 AND movie_id = $2"
            ),
            &[&user.inner(), &movie.inner()],
        )
        .await
        .map(|n| n > 0)
        .map_err(StoreError::from)
    }

    /// Favorites cascade with the users row.
    async fn forget(&self, _: ID<Account>) -> Result<(), StoreError> {
        Ok(())
    }
}
