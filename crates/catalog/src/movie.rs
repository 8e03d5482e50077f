use flix_core::ID;
use flix_core::Unique;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Genre {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Director {
    pub name: String,
    pub bio: String,
}

/// Catalog entry. Genre and director are embedded rather than shared, so
/// looking one up returns the first movie's copy.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Movie {
    id: ID<Self>,
    title: String,
    description: String,
    genre: Genre,
    director: Director,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_path: Option<String>,
    featured: bool,
}

impl Movie {
    pub fn new(
        id: ID<Self>,
        title: String,
        description: String,
        genre: Genre,
        director: Director,
        image_path: Option<String>,
        featured: bool,
    ) -> Self {
        Self {
            id,
            title,
            description,
            genre,
            director,
            image_path,
            featured,
        }
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn genre(&self) -> &Genre {
        &self.genre
    }
    pub fn director(&self) -> &Director {
        &self.director
    }
    pub fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }
    pub fn featured(&self) -> bool {
        self.featured
    }
}

impl Unique for Movie {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use flix_database::*;

    impl Schema for Movie {
        fn name() -> &'static str {
            MOVIES
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                MOVIES,
                " (
                    id                  UUID PRIMARY KEY,
                    title               TEXT UNIQUE NOT NULL,
                    description         TEXT NOT NULL,
                    genre_name          TEXT NOT NULL,
                    genre_description   TEXT NOT NULL,
                    director_name       TEXT NOT NULL,
                    director_bio        TEXT NOT NULL,
                    image_path          TEXT,
                    featured            BOOLEAN NOT NULL DEFAULT FALSE
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_movies_genre ON ",
                MOVIES,
                " (genre_name);
                 CREATE INDEX IF NOT EXISTS idx_movies_director ON ",
                MOVIES,
                " (director_name);"
            )
        }
    }
}
