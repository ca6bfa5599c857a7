use super::interactions::step;
use super::*;
use crate::game::decision_game::DecisionGame as DecisionState;
use crate::game::{
    DecisionAction, DecisionDeck, DecisionOption, DecisionScenario, Feedback, IgnoredReason,
    Theme, Transition,
};
use futures::executor::block_on;
use std::rc::Rc;
use yew::prelude::*;
use yew::{Callback, LocalServerRenderer};

fn sample_deck() -> DecisionDeck {
    DecisionDeck::new(vec![
        DecisionScenario {
            id: "quake-1".to_string(),
            title: "Library Shake".to_string(),
            scenario: "Books start falling off the shelves.".to_string(),
            options: vec![
                DecisionOption {
                    label: "Sprint for the stairs".to_string(),
                    is_correct: false,
                    feedback: "Stairs are dangerous while shaking.".to_string(),
                },
                DecisionOption {
                    label: "Take cover under a table".to_string(),
                    is_correct: true,
                    feedback: "Cover protects you from falling books.".to_string(),
                },
            ],
        },
        DecisionScenario {
            id: "quake-2".to_string(),
            title: "Aftershock".to_string(),
            scenario: "A smaller tremor follows.".to_string(),
            options: vec![
                DecisionOption {
                    label: "Drop, cover, hold on again".to_string(),
                    is_correct: true,
                    feedback: "Aftershocks deserve the same response.".to_string(),
                },
                DecisionOption {
                    label: "Ignore it".to_string(),
                    is_correct: false,
                    feedback: "Aftershocks can topple weakened structures.".to_string(),
                },
            ],
        },
    ])
    .unwrap()
}

#[test]
fn decision_game_renders_first_scenario() {
    let props = DecisionGameProps {
        scenarios: Rc::new(sample_deck()),
        topic: AttrValue::from("Earthquake"),
    };
    let html = block_on(LocalServerRenderer::<DecisionGame>::with_props(props).render());
    assert!(html.contains("Scenario 1 of 2"), "{html}");
    assert!(html.contains("Library Shake"), "{html}");
    assert!(html.contains("Books start falling off the shelves."), "{html}");
    assert!(html.contains("Take cover under a table"), "{html}");
    assert!(html.contains("width: 50%"), "{html}");
    assert!(html.contains("text-orange-400"), "{html}");
    assert!(!html.contains("decision-feedback"), "{html}");
}

#[test]
fn decision_game_unknown_topic_uses_neutral_theme() {
    let props = DecisionGameProps {
        scenarios: Rc::new(sample_deck()),
        topic: AttrValue::from("Wildfire"),
    };
    let html = block_on(LocalServerRenderer::<DecisionGame>::with_props(props).render());
    assert!(html.contains("text-emerald-400"), "{html}");
}

#[test]
fn feedback_panel_shows_correct_protocol_for_wrong_pick() {
    let view = FeedbackView::from_feedback(Feedback {
        selected: 0,
        label: "Sprint for the stairs".to_string(),
        is_correct: false,
        feedback: "Stairs are dangerous while shaking.".to_string(),
        correct_label: Some("Take cover under a table".to_string()),
    });
    let props = FeedbackPanelProps {
        view,
        next_label: AttrValue::from("Next Scenario"),
        on_next: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FeedbackPanel>::with_props(props).render());
    assert!(html.contains("Critical Error"), "{html}");
    assert!(html.contains("Correct Protocol:"), "{html}");
    assert!(html.contains("Take cover under a table"), "{html}");
    assert!(html.contains("Next Scenario"), "{html}");
}

#[test]
fn feedback_panel_hides_protocol_for_correct_pick() {
    let view = FeedbackView::from_feedback(Feedback {
        selected: 1,
        label: "Take cover under a table".to_string(),
        is_correct: true,
        feedback: "Cover protects you from falling books.".to_string(),
        correct_label: None,
    });
    let props = FeedbackPanelProps {
        view,
        next_label: AttrValue::from("Finish Simulation"),
        on_next: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FeedbackPanel>::with_props(props).render());
    assert!(html.contains("Excellent Decision"), "{html}");
    assert!(!html.contains("Correct Protocol:"), "{html}");
    assert!(html.contains("bg-emerald-600"), "{html}");
}

#[test]
fn results_panel_reports_score() {
    let props = ResultsPanelProps {
        score: 1,
        total: 2,
        theme: Theme::for_topic("Flood"),
        on_restart: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ResultsPanel>::with_props(props).render());
    assert!(html.contains("Simulation Complete"), "{html}");
    assert!(html.contains("out of 2 scenarios."), "{html}");
    assert!(html.contains(">1<"), "{html}");
    assert!(html.contains("bg-cyan-500"), "{html}");
    assert!(html.contains("Restart Simulation"), "{html}");
}

#[test]
fn step_walks_the_two_scenario_sequence() {
    let deck = sample_deck();
    let state = DecisionState::new();

    let (state, transition) = step(&deck, state, DecisionAction::Select(1));
    let state = state.expect("selection accepted");
    assert!(matches!(transition, Transition::Answered(ref f) if f.is_correct));

    let (unchanged, transition) = step(&deck, state, DecisionAction::Select(0));
    assert!(unchanged.is_none());
    assert_eq!(
        transition,
        Transition::Ignored(IgnoredReason::AlreadyAnswered)
    );

    let (state, _) = step(&deck, state, DecisionAction::Advance);
    let state = state.expect("advance accepted");
    let (state, _) = step(&deck, state, DecisionAction::Select(1));
    let state = state.expect("selection accepted");
    let (state, transition) = step(&deck, state, DecisionAction::Advance);
    let state = state.expect("finish accepted");
    assert_eq!(transition, Transition::Finished { score: 1, total: 2 });

    match build_decision_screen(&deck, &state, "Earthquake") {
        DecisionScreen::Results(vm) => assert_eq!((vm.score, vm.total), (1, 2)),
        DecisionScreen::Scenario(_) => panic!("expected results"),
    }

    let (state, _) = step(&deck, state, DecisionAction::Restart);
    assert_eq!(state, Some(DecisionState::new()));
}

#[derive(Properties, Clone, PartialEq)]
struct DispatchHarnessProps {
    action: DecisionAction,
}

#[function_component(DispatchHarness)]
fn dispatch_harness(props: &DispatchHarnessProps) -> Html {
    use super::interactions::dispatch_handler;

    let deck = use_memo((), |_| sample_deck());
    let state = use_state(DecisionState::new);
    let invoked = use_mut_ref(|| false);
    let handler = dispatch_handler(Rc::clone(&deck), state.clone());

    if !*invoked.borrow() {
        *invoked.borrow_mut() = true;
        handler.emit(props.action);
    }

    html! {
        <div data-score={state.score().to_string()} />
    }
}

#[test]
fn dispatch_handler_ignores_advance_before_answer() {
    let html = block_on(
        LocalServerRenderer::<DispatchHarness>::with_props(DispatchHarnessProps {
            action: DecisionAction::Advance,
        })
        .render(),
    );
    assert!(html.contains("data-score=\"0\""), "{html}");
}
