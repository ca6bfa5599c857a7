use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Multiple-choice question used by refresher and final quizzes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
}

impl QuizQuestion {
    #[must_use]
    pub const fn is_correct(&self, index: usize) -> bool {
        index == self.correct_answer
    }

    #[must_use]
    pub fn correct_text(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }

    /// # Errors
    ///
    /// Returns an error if there are no options or `correct_answer` does not
    /// index into them.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.options.is_empty() {
            return Err(ContentError::EmptyQuiz {
                question_id: self.id.clone(),
            });
        }
        if self.correct_answer >= self.options.len() {
            return Err(ContentError::AnswerOutOfRange {
                question_id: self.id.clone(),
                index: self.correct_answer,
                len: self.options.len(),
            });
        }
        Ok(())
    }
}

/// Tally of a graded quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizGrade {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

impl QuizGrade {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.answered == self.total
    }
}

/// Grade answers positionally against `questions`.
///
/// Missing trailing answers count as unanswered; surplus answers are ignored.
#[must_use]
pub fn grade_quiz(questions: &[QuizQuestion], answers: &[Option<usize>]) -> QuizGrade {
    let mut grade = QuizGrade {
        total: questions.len(),
        ..QuizGrade::default()
    };
    for (question, answer) in questions.iter().zip(answers) {
        if let Some(choice) = answer {
            grade.answered += 1;
            if question.is_correct(*choice) {
                grade.correct += 1;
            }
        }
    }
    grade
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, correct_answer: usize) -> QuizQuestion {
        QuizQuestion {
            id: id.to_string(),
            question: "What should go in a go-bag?".to_string(),
            options: vec![
                "Water".to_string(),
                "Television".to_string(),
                "Houseplants".to_string(),
            ],
            correct_answer,
        }
    }

    #[test]
    fn validate_checks_answer_bounds() {
        assert!(question("ok", 2).validate().is_ok());
        let err = question("bad", 3).validate().unwrap_err();
        assert!(matches!(
            err,
            ContentError::AnswerOutOfRange { index: 3, len: 3, .. }
        ));
    }

    #[test]
    fn validate_rejects_empty_options() {
        let mut q = question("empty", 0);
        q.options.clear();
        assert!(matches!(q.validate(), Err(ContentError::EmptyQuiz { .. })));
    }

    #[test]
    fn grade_counts_correct_and_unanswered() {
        let questions = vec![question("a", 0), question("b", 1), question("c", 2)];
        let grade = grade_quiz(&questions, &[Some(0), Some(2)]);
        assert_eq!(grade.correct, 1);
        assert_eq!(grade.answered, 2);
        assert_eq!(grade.total, 3);
        assert!(!grade.is_complete());
        assert!((grade.percent() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn parses_correct_answer_field() {
        let q: QuizQuestion = serde_json::from_str(
            r#"{"id":"q1","question":"?","options":["x","y"],"correctAnswer":1}"#,
        )
        .unwrap();
        assert_eq!(q.correct_text(), Some("y"));
    }
}
