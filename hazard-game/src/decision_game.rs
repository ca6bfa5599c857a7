//! Progression, scoring, and feedback for a decision scenario run.
//!
//! The game is a small finite state machine over a [`DecisionDeck`]:
//! `Presenting(i)` → `Answered(i)` via [`DecisionGame::select`],
//! `Answered(i)` → `Presenting(i + 1)` or `Results` via
//! [`DecisionGame::advance`], and any state → `Presenting(0)` via
//! [`DecisionGame::restart`]. The deck is borrowed per call so the state
//! stays a plain `Copy` value that UI layers can hold directly.

use serde::{Deserialize, Serialize};

use crate::decision::{DecisionDeck, DecisionScenario};

/// Where the player currently is in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionPhase {
    Presenting { index: usize },
    Answered { index: usize, selected: usize },
    Results,
}

/// Input events accepted by [`DecisionGame::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionAction {
    Select(usize),
    Advance,
    Restart,
}

/// What an applied action did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Answered(Feedback),
    NextScenario { index: usize },
    Finished { score: u32, total: usize },
    Restarted,
    Ignored(IgnoredReason),
}

/// Why an action left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    AlreadyAnswered,
    NotAnswered,
    OptionOutOfRange { index: usize, len: usize },
    ShowingResults,
}

/// Outcome panel contents shown after a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub selected: usize,
    pub label: String,
    pub is_correct: bool,
    pub feedback: String,
    /// Label of the first correct option, surfaced only for wrong picks.
    pub correct_label: Option<String>,
}

impl Feedback {
    fn for_selection(scenario: &DecisionScenario, selected: usize) -> Option<Self> {
        let option = scenario.option(selected)?;
        let correct_label = if option.is_correct {
            None
        } else {
            scenario.correct_option().map(|opt| opt.label.clone())
        };
        Some(Self {
            selected,
            label: option.label.clone(),
            is_correct: option.is_correct,
            feedback: option.feedback.clone(),
            correct_label,
        })
    }
}

/// Session-scoped state for one decision game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionGame {
    phase: DecisionPhase,
    score: u32,
}

impl Default for DecisionGame {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionGame {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: DecisionPhase::Presenting { index: 0 },
            score: 0,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> DecisionPhase {
        self.phase
    }

    /// Position in the deck. Stays on the last scenario once results show.
    #[must_use]
    pub fn current_index(&self, deck: &DecisionDeck) -> usize {
        match self.phase {
            DecisionPhase::Presenting { index } | DecisionPhase::Answered { index, .. } => index,
            DecisionPhase::Results => deck.len().saturating_sub(1),
        }
    }

    #[must_use]
    pub const fn selected_option(&self) -> Option<usize> {
        match self.phase {
            DecisionPhase::Answered { selected, .. } => Some(selected),
            DecisionPhase::Presenting { .. } | DecisionPhase::Results => None,
        }
    }

    /// True while the feedback panel for the current scenario is showing.
    #[must_use]
    pub const fn is_answered(&self) -> bool {
        matches!(self.phase, DecisionPhase::Answered { .. })
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn show_results(&self) -> bool {
        matches!(self.phase, DecisionPhase::Results)
    }

    #[must_use]
    pub fn current_scenario<'a>(&self, deck: &'a DecisionDeck) -> &'a DecisionScenario {
        deck.get(self.current_index(deck))
            .unwrap_or_else(|| deck.first())
    }

    /// Feedback for the current selection, if one has been made.
    #[must_use]
    pub fn feedback(&self, deck: &DecisionDeck) -> Option<Feedback> {
        match self.phase {
            DecisionPhase::Answered { index, selected } => deck
                .get(index)
                .and_then(|scenario| Feedback::for_selection(scenario, selected)),
            DecisionPhase::Presenting { .. } | DecisionPhase::Results => None,
        }
    }

    /// Whether the current scenario is the final one in the deck.
    #[must_use]
    pub fn is_last(&self, deck: &DecisionDeck) -> bool {
        self.current_index(deck) + 1 >= deck.len()
    }

    /// Record a choice for the current scenario.
    ///
    /// Repeated selections after answering, and indices outside the option
    /// list, leave the state untouched.
    pub fn select(&mut self, deck: &DecisionDeck, option_index: usize) -> Transition {
        let index = match self.phase {
            DecisionPhase::Presenting { index } => index,
            DecisionPhase::Answered { .. } => {
                return Transition::Ignored(IgnoredReason::AlreadyAnswered);
            }
            DecisionPhase::Results => return Transition::Ignored(IgnoredReason::ShowingResults),
        };
        let scenario = self.current_scenario(deck);
        let Some(feedback) = Feedback::for_selection(scenario, option_index) else {
            return Transition::Ignored(IgnoredReason::OptionOutOfRange {
                index: option_index,
                len: scenario.options.len(),
            });
        };

        self.phase = DecisionPhase::Answered {
            index,
            selected: option_index,
        };
        if feedback.is_correct {
            self.score = self.score.saturating_add(1);
        }
        Transition::Answered(feedback)
    }

    /// Move past an answered scenario, finishing after the last one.
    pub fn advance(&mut self, deck: &DecisionDeck) -> Transition {
        let index = match self.phase {
            DecisionPhase::Answered { index, .. } => index,
            DecisionPhase::Presenting { .. } => {
                return Transition::Ignored(IgnoredReason::NotAnswered);
            }
            DecisionPhase::Results => return Transition::Ignored(IgnoredReason::ShowingResults),
        };

        if index + 1 < deck.len() {
            let next = index + 1;
            self.phase = DecisionPhase::Presenting { index: next };
            Transition::NextScenario { index: next }
        } else {
            self.phase = DecisionPhase::Results;
            Transition::Finished {
                score: self.score,
                total: deck.len(),
            }
        }
    }

    /// Return to the opening scenario with a zero score.
    pub fn restart(&mut self) -> Transition {
        *self = Self::new();
        Transition::Restarted
    }

    /// Reducer entry point covering all three operations.
    pub fn apply(&mut self, deck: &DecisionDeck, action: DecisionAction) -> Transition {
        match action {
            DecisionAction::Select(option_index) => self.select(deck, option_index),
            DecisionAction::Advance => self.advance(deck),
            DecisionAction::Restart => self.restart(),
        }
    }

    /// Progress through the deck as a ratio in `(0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, deck: &DecisionDeck) -> f64 {
        (self.current_index(deck) + 1) as f64 / deck.len() as f64
    }

    /// Progress rendered as a CSS width percentage.
    #[must_use]
    pub fn progress_percent(&self, deck: &DecisionDeck) -> f64 {
        self.progress(deck) * 100.0
    }
}
