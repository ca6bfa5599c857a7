use crate::game::decision_game::DecisionGame as DecisionState;
use crate::game::{DecisionAction, DecisionDeck, Transition};
use std::rc::Rc;
use yew::prelude::*;

/// Apply one action to a copy of `state`, returning the next state if it changed.
#[must_use]
pub fn step(
    deck: &DecisionDeck,
    state: DecisionState,
    action: DecisionAction,
) -> (Option<DecisionState>, Transition) {
    let mut next = state;
    let transition = next.apply(deck, action);
    match &transition {
        Transition::Ignored(reason) => {
            log::warn!("Ignoring {action:?} in decision game: {reason:?}");
            (None, transition)
        }
        other => {
            log::debug!("Decision game transition: {other:?}");
            (Some(next), transition)
        }
    }
}

pub fn dispatch_handler(
    deck: Rc<DecisionDeck>,
    state: UseStateHandle<DecisionState>,
) -> Callback<DecisionAction> {
    Callback::from(move |action: DecisionAction| {
        if let (Some(next), _) = step(&deck, *state, action) {
            state.set(next);
        }
    })
}

pub fn select_handler(dispatch: &Callback<DecisionAction>) -> Callback<usize> {
    dispatch.reform(DecisionAction::Select)
}

pub fn advance_handler(dispatch: &Callback<DecisionAction>) -> Callback<()> {
    dispatch.reform(|()| DecisionAction::Advance)
}

pub fn restart_handler(dispatch: &Callback<DecisionAction>) -> Callback<()> {
    dispatch.reform(|()| DecisionAction::Restart)
}
