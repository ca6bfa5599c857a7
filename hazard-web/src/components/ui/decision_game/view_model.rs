use crate::game::decision_game::DecisionGame as DecisionState;
use crate::game::{DecisionDeck, Feedback, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackView {
    pub is_correct: bool,
    pub heading: &'static str,
    pub feedback: String,
    pub correct_label: Option<String>,
    pub panel_class: &'static str,
    pub heading_class: &'static str,
    pub icon_class: &'static str,
    pub next_button_class: &'static str,
}

impl FeedbackView {
    #[must_use]
    pub fn from_feedback(feedback: Feedback) -> Self {
        if feedback.is_correct {
            Self {
                is_correct: true,
                heading: "Excellent Decision",
                feedback: feedback.feedback,
                correct_label: None,
                panel_class: "bg-emerald-950/40 border-emerald-500/50",
                heading_class: "text-emerald-400",
                icon_class: "icon-check-circle text-emerald-400",
                next_button_class: "bg-emerald-600 hover:bg-emerald-500",
            }
        } else {
            Self {
                is_correct: false,
                heading: "Critical Error",
                feedback: feedback.feedback,
                correct_label: feedback.correct_label,
                panel_class: "bg-red-950/40 border-red-500/50",
                heading_class: "text-red-400",
                icon_class: "icon-x-circle text-red-400",
                next_button_class: "bg-slate-700 hover:bg-slate-600",
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioViewModel {
    pub theme: Theme,
    pub counter: String,
    pub title: String,
    pub prompt: String,
    pub progress_style: String,
    pub options: Vec<OptionView>,
    pub feedback: Option<FeedbackView>,
    pub next_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsViewModel {
    pub theme: Theme,
    pub score: u32,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DecisionScreen {
    Scenario(ScenarioViewModel),
    Results(ResultsViewModel),
}

/// Resolve everything the current screen needs from deck, state, and topic.
#[must_use]
pub fn build_decision_screen(
    deck: &DecisionDeck,
    state: &DecisionState,
    topic: &str,
) -> DecisionScreen {
    let theme = Theme::for_topic(topic);
    if state.show_results() {
        return DecisionScreen::Results(ResultsViewModel {
            theme,
            score: state.score(),
            total: deck.len(),
        });
    }

    let index = state.current_index(deck);
    let scenario = state.current_scenario(deck);
    let options = scenario
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| OptionView {
            index,
            label: option.label.clone(),
        })
        .collect();
    let next_label = if state.is_last(deck) {
        "Finish Simulation"
    } else {
        "Next Scenario"
    };

    DecisionScreen::Scenario(ScenarioViewModel {
        theme,
        counter: format!("Scenario {} of {}", index + 1, deck.len()),
        title: scenario.title.clone(),
        prompt: scenario.scenario.clone(),
        progress_style: format!("width: {}%", format_percent(state.progress_percent(deck))),
        options,
        feedback: state.feedback(deck).map(FeedbackView::from_feedback),
        next_label,
    })
}

fn format_percent(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}
