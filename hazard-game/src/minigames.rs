use serde::{Deserialize, Serialize};

/// When an earthquake action belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EqPhase {
    Before,
    During,
    After,
}

/// A preparedness action the player sorts into a phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EqStep {
    pub id: String,
    pub text: String,
    pub correct_category: EqPhase,
}

impl EqStep {
    #[must_use]
    pub fn judge(&self, placed: EqPhase) -> bool {
        self.correct_category == placed
    }
}

/// A situation the player marks as safe or unsafe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloodScenario {
    pub id: String,
    pub text: String,
    pub is_safe: bool,
    pub explanation: String,
}

impl FloodScenario {
    #[must_use]
    pub const fn judge(&self, guess_safe: bool) -> bool {
        self.is_safe == guess_safe
    }
}
