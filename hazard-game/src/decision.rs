use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// One labelled course of action within a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOption {
    pub label: String,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub feedback: String,
}

/// A single decision-point prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionScenario {
    pub id: String,
    pub title: String,
    pub scenario: String,
    #[serde(default)]
    pub options: Vec<DecisionOption>,
}

impl DecisionScenario {
    /// First option marked correct, if any.
    #[must_use]
    pub fn correct_option(&self) -> Option<&DecisionOption> {
        self.options.iter().find(|opt| opt.is_correct)
    }

    /// Index of the first option marked correct.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|opt| opt.is_correct)
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&DecisionOption> {
        self.options.get(index)
    }

    /// Check that the scenario has options and exactly one correct answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the options list is empty or the number of correct
    /// options is not exactly one.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.options.is_empty() {
            return Err(ContentError::NoOptions {
                scenario_id: self.id.clone(),
            });
        }
        match self.options.iter().filter(|opt| opt.is_correct).count() {
            0 => Err(ContentError::NoCorrectOption {
                scenario_id: self.id.clone(),
            }),
            1 => Ok(()),
            count => Err(ContentError::MultipleCorrectOptions {
                scenario_id: self.id.clone(),
                count,
            }),
        }
    }
}

/// Validated, non-empty sequence of scenarios fed to a decision game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DecisionDeck(Vec<DecisionScenario>);

impl DecisionDeck {
    /// Build a deck, rejecting empty lists and malformed scenarios.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::EmptyDeck`] for an empty list, or the first
    /// scenario validation failure.
    pub fn new(scenarios: Vec<DecisionScenario>) -> Result<Self, ContentError> {
        if scenarios.is_empty() {
            return Err(ContentError::EmptyDeck);
        }
        for scenario in &scenarios {
            scenario.validate()?;
        }
        Ok(Self(scenarios))
    }

    /// Load and validate a deck from a JSON array of scenarios.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the deck is invalid.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let scenarios: Vec<DecisionScenario> = serde_json::from_str(json)?;
        Self::new(scenarios)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DecisionScenario> {
        self.0.get(index)
    }

    /// The opening scenario. Decks are never empty.
    #[must_use]
    pub fn first(&self) -> &DecisionScenario {
        &self.0[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DecisionScenario> {
        self.0.iter()
    }

    #[must_use]
    pub fn scenarios(&self) -> &[DecisionScenario] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for DecisionDeck {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let scenarios = Vec::<DecisionScenario>::deserialize(deserializer)?;
        Self::new(scenarios).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a DecisionDeck {
    type Item = &'a DecisionScenario;
    type IntoIter = std::slice::Iter<'a, DecisionScenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(label: &str, is_correct: bool) -> DecisionOption {
        DecisionOption {
            label: label.to_string(),
            is_correct,
            feedback: format!("{label} feedback"),
        }
    }

    fn scenario(id: &str, options: Vec<DecisionOption>) -> DecisionScenario {
        DecisionScenario {
            id: id.to_string(),
            title: format!("Title {id}"),
            scenario: "Ground is shaking".to_string(),
            options,
        }
    }

    #[test]
    fn correct_option_uses_first_match() {
        let s = scenario(
            "s1",
            vec![option("a", false), option("b", true), option("c", true)],
        );
        assert_eq!(s.correct_option().map(|o| o.label.as_str()), Some("b"));
        assert_eq!(s.correct_index(), Some(1));
    }

    #[test]
    fn deck_rejects_empty_list() {
        assert!(matches!(
            DecisionDeck::new(Vec::new()),
            Err(ContentError::EmptyDeck)
        ));
    }

    #[test]
    fn deck_rejects_scenarios_without_options() {
        let err = DecisionDeck::new(vec![scenario("bare", Vec::new())]).unwrap_err();
        assert!(matches!(err, ContentError::NoOptions { ref scenario_id } if scenario_id == "bare"));
    }

    #[test]
    fn deck_rejects_wrong_correct_counts() {
        let none = DecisionDeck::new(vec![scenario("none", vec![option("a", false)])]);
        assert!(matches!(none, Err(ContentError::NoCorrectOption { .. })));

        let many = DecisionDeck::new(vec![scenario(
            "many",
            vec![option("a", true), option("b", true)],
        )]);
        assert!(matches!(
            many,
            Err(ContentError::MultipleCorrectOptions { count: 2, .. })
        ));
    }

    #[test]
    fn deck_parses_camel_case_json() {
        let json = r#"[
            {
                "id": "eq-1",
                "title": "Office tremor",
                "scenario": "Your desk starts rattling.",
                "options": [
                    { "label": "Run outside", "isCorrect": false, "feedback": "Falling glass." },
                    { "label": "Drop, cover, hold on", "isCorrect": true, "feedback": "Correct." }
                ]
            }
        ]"#;
        let deck = DecisionDeck::from_json(json).unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.first().correct_index(), Some(1));
        assert_eq!(deck.first().options[0].feedback, "Falling glass.");
    }

    #[test]
    fn deck_deserialize_enforces_invariants() {
        let result: Result<DecisionDeck, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }
}
