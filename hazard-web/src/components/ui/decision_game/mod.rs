mod feedback;
mod interactions;
mod option;
mod results;
mod view;
mod view_model;

pub use feedback::{FeedbackPanel, FeedbackPanelProps};
pub use results::{ResultsPanel, ResultsPanelProps};
pub use view::{DecisionGame, DecisionGameProps};
pub use view_model::{DecisionScreen, FeedbackView, build_decision_screen};

#[cfg(test)]
mod tests;
