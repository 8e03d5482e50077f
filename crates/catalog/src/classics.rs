use super::*;
use flix_auth::StoreError;
use flix_core::ID;

/// Fills an empty catalog with [`classics`]. A catalog that already holds
/// movies is left alone. Titles inserted concurrently by another process
/// are skipped. Returns how many movies were added.
pub async fn stock(catalog: &dyn Catalog) -> Result<usize, StoreError> {
    if !catalog.movies().await?.is_empty() {
        return Ok(0);
    }
    let mut added = 0;
    for movie in classics() {
        match catalog.insert(&movie).await {
            Ok(()) => added += 1,
            Err(StoreError::Conflict) => log::debug!("{} already stocked", movie.title()),
            Err(e) => return Err(e),
        }
    }
    log::info!("stocked catalog with {} movies", added);
    Ok(added)
}

/// The ten titles every fresh catalog starts with.
#[rustfmt::skip]
pub fn classics() -> Vec<Movie> {
    let scifi = Genre { name: "Science Fiction".into(), description: "Speculative stories built on science and technology.".into() };
    let action = Genre { name: "Action".into(), description: "Physical conflict, chases and set pieces.".into() };
    let horror = Genre { name: "Horror".into(), description: "Stories meant to frighten and unsettle.".into() };
    let crime = Genre { name: "Crime".into(), description: "Criminals, detectives and the space between.".into() };
    let wachowskis = Director { name: "Lana and Lilly Wachowski".into(), bio: "American filmmakers known for The Matrix series.".into() };
    let scott = Director { name: "Ridley Scott".into(), bio: "English director of Alien, Blade Runner and Gladiator.".into() };
    let cameron = Director { name: "James Cameron".into(), bio: "Canadian director of The Terminator, Aliens and Titanic.".into() };
    let besson = Director { name: "Luc Besson".into(), bio: "French director of Léon and The Fifth Element.".into() };
    let mctiernan = Director { name: "John McTiernan".into(), bio: "American director of Predator and Die Hard.".into() };
    let spielberg = Director { name: "Steven Spielberg".into(), bio: "American director of Jaws, E.T. and Jurassic Park.".into() };
    let mann = Director { name: "Michael Mann".into(), bio: "American director of Thief, Heat and Collateral.".into() };
    [
        ("Matrix", "A hacker learns the world he knows is a simulation.", &scifi, &wachowskis, true),
        ("Blade Runner", "A blade runner hunts replicants in a rain-soaked Los Angeles.", &scifi, &scott, true),
        ("Alien", "The crew of the Nostromo meets something it cannot kill.", &horror, &scott, false),
        ("Aliens", "Ripley returns to LV-426 with a squad of colonial marines.", &action, &cameron, false),
        ("Terminator", "A cyborg assassin is sent back in time to kill Sarah Connor.", &scifi, &cameron, false),
        ("Terminator 2", "A reprogrammed Terminator protects a young John Connor.", &action, &cameron, true),
        ("The Fifth Element", "A cab driver becomes the key to saving the universe.", &scifi, &besson, false),
        ("Die Hard", "A New York cop takes on terrorists in a Los Angeles tower.", &action, &mctiernan, false),
        ("Jurassic Park", "Cloned dinosaurs escape on an island theme park.", &scifi, &spielberg, false),
        ("Heat", "A detective and a master thief circle each other across Los Angeles.", &crime, &mann, false),
    ]
    .into_iter()
    .map(|(title, description, genre, director, featured)| {
        Movie::new(ID::default(), title.into(), description.into(), genre.clone(), director.clone(), None, featured)
    })
    .collect()
}
