use hazard_game::{GameType, Lecture, LectureCatalog, QuizGrade, QuizQuestion, grade_quiz};
use serde::Serialize;

/// Answer-key grade for one of a lecture's quizzes.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuizCheck {
    pub lecture_id: String,
    pub quiz: &'static str,
    pub grade: QuizGrade,
}

/// Content problems found in a lecture catalog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub lectures: usize,
    pub decision_games: usize,
    pub quiz_questions: usize,
    pub simulators: usize,
    pub quiz_grades: Vec<QuizCheck>,
    pub problems: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.problems.is_empty()
    }
}

#[must_use]
pub fn validate_catalog(catalog: &LectureCatalog) -> ValidationReport {
    let mut report = ValidationReport {
        lectures: catalog.len(),
        ..ValidationReport::default()
    };

    for lecture in catalog.iter() {
        if lecture.decision_game.is_some() {
            report.decision_games += 1;
        }
        if lecture.game_type != GameType::None {
            report.simulators += 1;
        }
        check_quizzes(lecture, &mut report);
        if lecture.sections.is_empty() {
            report
                .problems
                .push(format!("lecture `{}` has no sections", lecture.id));
        }
    }

    let mut seen = std::collections::BTreeSet::new();
    for lecture in catalog.iter() {
        if !seen.insert(lecture.id.as_str()) {
            report
                .problems
                .push(format!("duplicate lecture id `{}`", lecture.id));
        }
    }

    report
        .problems
        .extend(catalog.problems().iter().map(ToString::to_string));
    report
}

/// Answer sheet that looks up each key by its option text.
///
/// A key outside the option list stays unanswered; duplicated option text
/// resolves to the first match, so an ambiguous key grades as wrong.
fn answer_key_sheet(questions: &[QuizQuestion]) -> Vec<Option<usize>> {
    questions
        .iter()
        .map(|question| {
            let text = question.correct_text()?;
            question.options.iter().position(|option| option == text)
        })
        .collect()
}

fn check_quizzes(lecture: &Lecture, report: &mut ValidationReport) {
    let quizzes = [
        ("refresher", lecture.refresher_quiz.as_deref()),
        ("final", lecture.final_quiz.as_deref()),
    ];
    for (quiz, questions) in quizzes {
        let Some(questions) = questions else {
            continue;
        };
        report.quiz_questions += questions.len();
        let grade = grade_quiz(questions, &answer_key_sheet(questions));
        if grade.total == 0 {
            report
                .problems
                .push(format!("lecture `{}` {quiz} quiz has no questions", lecture.id));
        } else if grade.percent() < 100.0 {
            let detail = if grade.is_complete() {
                "ambiguous option text"
            } else {
                "answer missing from options"
            };
            report.problems.push(format!(
                "lecture `{}` {quiz} quiz: answer key scores {:.1}% ({}/{}, {detail})",
                lecture.id,
                grade.percent(),
                grade.correct,
                grade.total
            ));
        }
        report.quiz_grades.push(QuizCheck {
            lecture_id: lecture.id.clone(),
            quiz,
            grade,
        });
    }
}
