use hazard_game::{
    DecisionAction, DecisionDeck, DecisionGame, DecisionOption, DecisionScenario, Transition,
};

fn two_option_scenario(id: &str, correct: usize) -> DecisionScenario {
    let options = (0..2)
        .map(|i| DecisionOption {
            label: format!("{id}-option-{i}"),
            is_correct: i == correct,
            feedback: format!("{id}-feedback-{i}"),
        })
        .collect();
    DecisionScenario {
        id: id.to_string(),
        title: format!("Scenario {id}"),
        scenario: "Ash is falling from the sky.".to_string(),
        options,
    }
}

fn deck_of(n: usize) -> DecisionDeck {
    DecisionDeck::new(
        (0..n)
            .map(|i| two_option_scenario(&format!("s{i}"), i % 2))
            .collect(),
    )
    .expect("valid deck")
}

fn play(game: &mut DecisionGame, deck: &DecisionDeck, picks: &[usize]) {
    for &pick in picks {
        game.apply(deck, DecisionAction::Select(pick));
        game.apply(deck, DecisionAction::Advance);
    }
}

#[test]
fn initial_state_is_zeroed_for_any_deck_size() {
    for n in 1..6 {
        let deck = deck_of(n);
        let game = DecisionGame::new();
        assert_eq!(game.current_index(&deck), 0);
        assert_eq!(game.score(), 0);
        assert!(!game.show_results());
    }
}

#[test]
fn correct_pick_scores_once_incorrect_scores_nothing() {
    let deck = deck_of(2);
    let mut game = DecisionGame::new();
    game.select(&deck, 0);
    assert_eq!(game.score(), 1);
    game.select(&deck, 0);
    assert_eq!(game.score(), 1, "repeat selection must not score again");

    game.advance(&deck);
    game.select(&deck, 0);
    assert_eq!(game.score(), 1, "wrong pick leaves score unchanged");
}

#[test]
fn advancing_from_last_shows_results_regardless_of_correctness() {
    for pick in [0, 1] {
        let deck = deck_of(1);
        let mut game = DecisionGame::new();
        game.select(&deck, pick);
        let transition = game.advance(&deck);
        assert!(matches!(transition, Transition::Finished { total: 1, .. }));
        assert!(game.show_results());
    }
}

#[test]
fn restart_from_any_state_matches_initial() {
    let deck = deck_of(3);
    let mut states = Vec::new();
    let mut game = DecisionGame::new();
    states.push(game);
    game.select(&deck, 0);
    states.push(game);
    game.advance(&deck);
    states.push(game);
    play(&mut game, &deck, &[1, 0]);
    states.push(game);

    for mut state in states {
        state.restart();
        assert_eq!(state, DecisionGame::new());
    }
}

#[test]
fn two_scenario_walkthrough_scores_one_of_two() {
    let deck = DecisionDeck::new(vec![
        two_option_scenario("first", 0),
        two_option_scenario("second", 0),
    ])
    .unwrap();
    let mut game = DecisionGame::new();

    game.apply(&deck, DecisionAction::Select(0));
    assert_eq!(game.score(), 1);

    game.apply(&deck, DecisionAction::Advance);
    assert_eq!(game.current_index(&deck), 1);
    assert!(!game.is_answered());

    let Transition::Answered(feedback) = game.apply(&deck, DecisionAction::Select(1)) else {
        panic!("second selection should be accepted");
    };
    assert_eq!(feedback.correct_label.as_deref(), Some("second-option-0"));
    assert_eq!(game.score(), 1);

    assert_eq!(
        game.apply(&deck, DecisionAction::Advance),
        Transition::Finished { score: 1, total: 2 }
    );
    assert!(game.show_results());
}

#[test]
fn restart_after_results_reproduces_same_score() {
    let deck = deck_of(4);
    let picks = [0, 1, 1, 1];
    let mut game = DecisionGame::new();
    play(&mut game, &deck, &picks);
    assert!(game.show_results());
    let first_score = game.score();

    game.apply(&deck, DecisionAction::Restart);
    assert_eq!(game.score(), 0);
    assert!(!game.show_results());

    play(&mut game, &deck, &picks);
    assert!(game.show_results());
    assert_eq!(game.score(), first_score);
    assert_eq!(first_score, 3);
}
