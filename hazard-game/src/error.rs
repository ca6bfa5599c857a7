use thiserror::Error;

/// Problems found while loading or validating lesson content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("decision game has no scenarios")]
    EmptyDeck,
    #[error("scenario `{scenario_id}` has no options")]
    NoOptions { scenario_id: String },
    #[error("scenario `{scenario_id}` has no option marked correct")]
    NoCorrectOption { scenario_id: String },
    #[error("scenario `{scenario_id}` marks {count} options correct")]
    MultipleCorrectOptions { scenario_id: String, count: usize },
    #[error("question `{question_id}` has no options")]
    EmptyQuiz { question_id: String },
    #[error("question `{question_id}` answer index {index} is outside {len} options")]
    AnswerOutOfRange {
        question_id: String,
        index: usize,
        len: usize,
    },
    #[error("lecture `{lecture_id}`: {source}")]
    Lecture {
        lecture_id: String,
        #[source]
        source: Box<ContentError>,
    },
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContentError {
    /// Wrap a nested problem with the lecture it came from.
    #[must_use]
    pub fn in_lecture(self, lecture_id: &str) -> Self {
        Self::Lecture {
            lecture_id: lecture_id.to_string(),
            source: Box::new(self),
        }
    }
}
