use std::time::{Duration, Instant};

use hazard_game::{DecisionAction, DecisionDeck, DecisionGame, LectureCatalog, Transition};
use serde::Serialize;

use super::policy::{GameplayStrategy, PlayerPolicy};

/// One scripted run through a lecture's decision deck.
#[derive(Debug, Clone, Serialize)]
pub struct PlaythroughRecord {
    pub lecture_id: String,
    pub policy: String,
    pub seed: u64,
    pub score: u32,
    pub total: usize,
    pub picks: Vec<usize>,
    pub completed: bool,
    #[serde(with = "duration_micros")]
    pub duration: Duration,
}

impl PlaythroughRecord {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.score) / self.total as f64 * 100.0
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        usize::try_from(self.score).is_ok_and(|score| score == self.total)
    }
}

mod duration_micros {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u128(value.as_micros())
    }
}

/// Drive a deck to its results screen with `policy` choosing each option.
pub fn run_playthrough(
    lecture_id: &str,
    deck: &DecisionDeck,
    policy: &mut dyn PlayerPolicy,
    seed: u64,
) -> PlaythroughRecord {
    let start = Instant::now();
    let mut game = DecisionGame::new();
    let mut picks = Vec::with_capacity(deck.len());
    let mut completed = true;

    while !game.show_results() {
        let scenario = game.current_scenario(deck);
        let decision = policy.pick_option(scenario);
        log::debug!(
            "{} picks option {} on {} ({})",
            policy.name(),
            decision.option_index,
            scenario.id,
            decision.rationale.as_deref().unwrap_or("-")
        );
        picks.push(decision.option_index);

        if let Transition::Ignored(reason) =
            game.apply(deck, DecisionAction::Select(decision.option_index))
        {
            log::warn!("{lecture_id}: selection on {} ignored ({reason:?})", scenario.id);
            completed = false;
            break;
        }
        game.apply(deck, DecisionAction::Advance);
    }

    PlaythroughRecord {
        lecture_id: lecture_id.to_string(),
        policy: policy.name().to_string(),
        seed,
        score: game.score(),
        total: deck.len(),
        picks,
        completed,
        duration: start.elapsed(),
    }
}

/// Run every strategy over every lecture deck.
///
/// Unseeded strategies run once regardless of how many seeds are supplied.
#[must_use]
pub fn run_catalog(
    catalog: &LectureCatalog,
    strategies: &[GameplayStrategy],
    seeds: &[u64],
) -> Vec<PlaythroughRecord> {
    let mut records = Vec::new();
    for lecture in catalog.iter() {
        let deck = match lecture.decision_deck() {
            Ok(Some(deck)) => deck,
            Ok(None) => continue,
            Err(err) => {
                log::warn!("skipping {}: {err}", lecture.id);
                continue;
            }
        };
        for strategy in strategies {
            let run_seeds = if strategy.is_seeded() {
                seeds
            } else {
                &seeds[..seeds.len().min(1)]
            };
            for &seed in run_seeds {
                let mut policy = strategy.create_policy(seed);
                records.push(run_playthrough(&lecture.id, &deck, policy.as_mut(), seed));
            }
        }
    }
    records
}
