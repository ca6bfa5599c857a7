//! Hazard preparedness learning games
//!
//! Platform-agnostic core for the hazard preparedness lessons: the lecture
//! content model, the decision scenario game, topic themes and styling
//! configuration. This crate has no UI or browser dependencies.

pub mod decision;
pub mod decision_game;
pub mod error;
pub mod lecture;
pub mod minigames;
pub mod quiz;
pub mod styling;
pub mod theme;

pub use decision::{DecisionDeck, DecisionOption, DecisionScenario};
pub use decision_game::{
    DecisionAction, DecisionGame, DecisionPhase, Feedback, IgnoredReason, Transition,
};
pub use error::ContentError;
pub use lecture::{
    Difficulty, GameType, HazardTopic, Lecture, LectureCatalog, LectureSection, TocItem,
};
pub use minigames::{EqPhase, EqStep, FloodScenario};
pub use quiz::{QuizGrade, QuizQuestion, grade_quiz};
pub use styling::{BrandShade, FontFamily, StyleConfig};
pub use theme::Theme;

/// Trait for abstracting content loading
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the lecture catalog from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or parsed.
    fn load_catalog(&self) -> Result<LectureCatalog, Self::Error>;
}

/// Read-only access to lesson content through a [`DataLoader`]
pub struct ContentLibrary<L>
where
    L: DataLoader,
{
    loader: L,
}

impl<L> ContentLibrary<L>
where
    L: DataLoader,
{
    pub const fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Load the catalog and drop lectures that break content invariants.
    ///
    /// Returns the usable lectures alongside the problems that excluded the rest.
    ///
    /// # Errors
    ///
    /// Returns an error if the loader fails.
    pub fn load_validated(&self) -> Result<(LectureCatalog, Vec<ContentError>), L::Error> {
        let catalog = self.loader.load_catalog()?;
        let mut problems = Vec::new();
        let mut usable = Vec::with_capacity(catalog.len());
        for lecture in catalog.0 {
            let lecture_problems = lecture.problems();
            if lecture_problems.is_empty() {
                usable.push(lecture);
            } else {
                problems.extend(lecture_problems);
            }
        }
        Ok((LectureCatalog(usable), problems))
    }

    /// Decision deck for a lecture, if the lecture exists and has a valid game.
    ///
    /// # Errors
    ///
    /// Returns an error if the loader fails.
    pub fn decision_deck(&self, lecture_id: &str) -> Result<Option<DecisionDeck>, L::Error> {
        let catalog = self.loader.load_catalog()?;
        Ok(catalog
            .get_by_id(lecture_id)
            .and_then(|lecture| lecture.decision_deck().ok().flatten()))
    }
}
