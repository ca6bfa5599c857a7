use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decision::{DecisionDeck, DecisionScenario};
use crate::error::ContentError;
use crate::quiz::QuizQuestion;

/// Hazard category a lecture belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HazardTopic {
    Earthquake,
    Flood,
    Volcano,
    #[default]
    General,
}

impl HazardTopic {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Earthquake => "Earthquake",
            Self::Flood => "Flood",
            Self::Volcano => "Volcano",
            Self::General => "General",
        }
    }
}

impl fmt::Display for HazardTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Embedded simulator attached to a lecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GameType {
    EarthquakeSim,
    FloodSim,
    VolcanicEruptionSim,
    #[default]
    None,
}

impl GameType {
    #[must_use]
    pub const fn has_simulator(self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureSection {
    pub id: String,
    pub title: String,
    /// HTML fragment for this page of the lecture.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocItem {
    pub title: String,
    pub section_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecture {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub topic: HazardTopic,
    #[serde(default)]
    pub image_url: String,
    /// Estimated reading time in minutes.
    #[serde(default)]
    pub read_time: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub competencies: Vec<String>,
    #[serde(default)]
    pub sections: Vec<LectureSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresher_quiz: Option<Vec<QuizQuestion>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_game: Option<Vec<DecisionScenario>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_quiz: Option<Vec<QuizQuestion>>,
    #[serde(default)]
    pub game_type: GameType,
}

impl Lecture {
    /// One entry per section, in reading order.
    #[must_use]
    pub fn table_of_contents(&self) -> Vec<TocItem> {
        self.sections
            .iter()
            .enumerate()
            .map(|(section_index, section)| TocItem {
                title: section.title.clone(),
                section_index,
            })
            .collect()
    }

    /// Validated deck for the lecture's decision game, if it has one.
    ///
    /// # Errors
    ///
    /// Returns an error if the scenarios break the deck invariants.
    pub fn decision_deck(&self) -> Result<Option<DecisionDeck>, ContentError> {
        self.decision_game
            .as_ref()
            .map(|scenarios| DecisionDeck::new(scenarios.clone()))
            .transpose()
            .map_err(|err| err.in_lecture(&self.id))
    }

    /// Collect every invariant violation in quizzes and scenarios.
    #[must_use]
    pub fn problems(&self) -> Vec<ContentError> {
        let mut problems = Vec::new();
        let quizzes = self
            .refresher_quiz
            .iter()
            .chain(self.final_quiz.iter())
            .flatten();
        for question in quizzes {
            if let Err(err) = question.validate() {
                problems.push(err.in_lecture(&self.id));
            }
        }
        if let Some(scenarios) = &self.decision_game {
            if scenarios.is_empty() {
                problems.push(ContentError::EmptyDeck.in_lecture(&self.id));
            }
            for scenario in scenarios {
                if let Err(err) = scenario.validate() {
                    problems.push(err.in_lecture(&self.id));
                }
            }
        }
        problems
    }

    /// # Errors
    ///
    /// Returns the first problem found by [`Lecture::problems`].
    pub fn validate(&self) -> Result<(), ContentError> {
        match self.problems().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Ordered collection of lectures as shipped with the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct LectureCatalog(pub Vec<Lecture>);

impl LectureCatalog {
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Load lectures from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into lectures.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Lecture> {
        self.0.iter().find(|lecture| lecture.id == id)
    }

    pub fn by_topic(&self, topic: HazardTopic) -> impl Iterator<Item = &Lecture> {
        self.0.iter().filter(move |lecture| lecture.topic == topic)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lecture> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every problem across all lectures.
    #[must_use]
    pub fn problems(&self) -> Vec<ContentError> {
        self.0.iter().flat_map(Lecture::problems).collect()
    }

    /// # Errors
    ///
    /// Returns every problem found when any lecture breaks content invariants.
    pub fn validate(&self) -> Result<(), Vec<ContentError>> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}
