use std::fmt;
use std::str::FromStr;

use hazard_game::DecisionScenario;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Decision returned by a [`PlayerPolicy`]
#[derive(Debug, Clone)]
pub struct PolicyDecision {
    pub option_index: usize,
    pub rationale: Option<String>,
}

impl PolicyDecision {
    #[must_use]
    pub fn new(option_index: usize, rationale: Option<String>) -> Self {
        Self {
            option_index,
            rationale,
        }
    }
}

/// Policy interface for automated play strategies.
pub trait PlayerPolicy {
    /// Name used for logging/debug output.
    fn name(&self) -> &'static str;

    /// Pick an option for the scenario on screen.
    fn pick_option(&mut self, scenario: &DecisionScenario) -> PolicyDecision;
}

/// Built-in strategies for scripted playthroughs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameplayStrategy {
    Oracle,
    FirstOption,
    LastOption,
    Random,
}

impl GameplayStrategy {
    pub const ALL: [Self; 4] = [
        Self::Oracle,
        Self::FirstOption,
        Self::LastOption,
        Self::Random,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GameplayStrategy::Oracle => "Oracle",
            GameplayStrategy::FirstOption => "First Option",
            GameplayStrategy::LastOption => "Last Option",
            GameplayStrategy::Random => "Random",
        }
    }

    #[must_use]
    pub fn create_policy(self, seed: u64) -> Box<dyn PlayerPolicy> {
        match self {
            GameplayStrategy::Oracle => Box::new(OraclePolicy),
            GameplayStrategy::FirstOption => Box::new(FirstOptionPolicy),
            GameplayStrategy::LastOption => Box::new(LastOptionPolicy),
            GameplayStrategy::Random => Box::new(RandomPolicy::new(seed)),
        }
    }

    /// Whether repeated runs with different seeds can differ.
    #[must_use]
    pub const fn is_seeded(self) -> bool {
        matches!(self, Self::Random)
    }
}

impl fmt::Display for GameplayStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameplayStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oracle" => Ok(Self::Oracle),
            "first" | "first-option" => Ok(Self::FirstOption),
            "last" | "last-option" => Ok(Self::LastOption),
            "random" => Ok(Self::Random),
            other => anyhow::bail!("unknown policy `{other}`"),
        }
    }
}

struct OraclePolicy;
struct FirstOptionPolicy;
struct LastOptionPolicy;

struct RandomPolicy {
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl PlayerPolicy for OraclePolicy {
    fn name(&self) -> &'static str {
        "Oracle"
    }

    fn pick_option(&mut self, scenario: &DecisionScenario) -> PolicyDecision {
        let idx = scenario.correct_index().unwrap_or(0);
        PolicyDecision::new(idx, Some("marked correct".to_string()))
    }
}

impl PlayerPolicy for FirstOptionPolicy {
    fn name(&self) -> &'static str {
        "First Option"
    }

    fn pick_option(&mut self, _scenario: &DecisionScenario) -> PolicyDecision {
        PolicyDecision::new(0, None)
    }
}

impl PlayerPolicy for LastOptionPolicy {
    fn name(&self) -> &'static str {
        "Last Option"
    }

    fn pick_option(&mut self, scenario: &DecisionScenario) -> PolicyDecision {
        PolicyDecision::new(scenario.options.len().saturating_sub(1), None)
    }
}

impl PlayerPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn pick_option(&mut self, scenario: &DecisionScenario) -> PolicyDecision {
        let len = scenario.options.len().max(1);
        let idx = self.rng.gen_range(0..len);
        PolicyDecision::new(idx, Some(format!("rolled {idx} of {len}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazard_game::DecisionOption;

    fn scenario() -> DecisionScenario {
        DecisionScenario {
            id: "p".to_string(),
            title: "Policy".to_string(),
            scenario: "Pick one".to_string(),
            options: ["a", "b", "c"]
                .iter()
                .enumerate()
                .map(|(i, label)| DecisionOption {
                    label: (*label).to_string(),
                    is_correct: i == 1,
                    feedback: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn oracle_picks_correct_option() {
        let mut policy = GameplayStrategy::Oracle.create_policy(0);
        assert_eq!(policy.pick_option(&scenario()).option_index, 1);
    }

    #[test]
    fn positional_policies_pick_ends() {
        let s = scenario();
        assert_eq!(
            GameplayStrategy::FirstOption
                .create_policy(0)
                .pick_option(&s)
                .option_index,
            0
        );
        assert_eq!(
            GameplayStrategy::LastOption
                .create_policy(0)
                .pick_option(&s)
                .option_index,
            2
        );
    }

    #[test]
    fn random_policy_is_deterministic_per_seed() {
        let s = scenario();
        let picks = |seed| {
            let mut policy = GameplayStrategy::Random.create_policy(seed);
            (0..16)
                .map(|_| policy.pick_option(&s).option_index)
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(7), picks(7));
        assert!(picks(7).iter().all(|idx| *idx < 3));
    }

    #[test]
    fn strategies_parse_from_cli_tokens() {
        assert_eq!(
            "first".parse::<GameplayStrategy>().unwrap(),
            GameplayStrategy::FirstOption
        );
        assert_eq!(
            " Oracle ".parse::<GameplayStrategy>().unwrap(),
            GameplayStrategy::Oracle
        );
        assert!("greedy".parse::<GameplayStrategy>().is_err());
    }
}
