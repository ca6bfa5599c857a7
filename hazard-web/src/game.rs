//! Web-specific content loading
//!
//! This module provides the web implementation of the hazard-game loader
//! trait and re-exports the core game types.

pub use hazard_game::*;

/// Lecture content bundled with the static assets.
pub const LECTURES_JSON: &str = include_str!("../static/assets/data/lectures.json");

/// Web data loader that reads the bundled lecture catalog
pub struct WebDataLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DataLoader for WebDataLoader {
    type Error = WebDataError;

    fn load_catalog(&self) -> Result<LectureCatalog, Self::Error> {
        LectureCatalog::from_json(LECTURES_JSON).map_err(WebDataError::Json)
    }
}

/// Load the bundled catalog, logging and skipping lectures with broken content.
#[must_use]
pub fn load_bundled_catalog() -> LectureCatalog {
    match ContentLibrary::new(WebDataLoader).load_validated() {
        Ok((catalog, problems)) => {
            for problem in &problems {
                log::warn!("Skipping lecture content: {problem}");
            }
            catalog
        }
        Err(err) => {
            log::error!("Failed to load lecture catalog: {err}");
            LectureCatalog::empty()
        }
    }
}
