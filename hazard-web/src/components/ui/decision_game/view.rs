use super::feedback::FeedbackPanel;
use super::interactions::{advance_handler, dispatch_handler, restart_handler, select_handler};
use super::option::DecisionOptionButton;
use super::results::ResultsPanel;
use super::view_model::{DecisionScreen, ScenarioViewModel, build_decision_screen};
use crate::game::decision_game::DecisionGame as DecisionState;
use crate::game::{DecisionAction, DecisionDeck};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct DecisionGameProps {
    pub scenarios: Rc<DecisionDeck>,
    /// Hazard label used only to pick the accent theme.
    pub topic: AttrValue,
}

impl PartialEq for DecisionGameProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.scenarios, &other.scenarios) && self.topic == other.topic
    }
}

#[function_component(DecisionGame)]
pub fn decision_game(props: &DecisionGameProps) -> Html {
    let state = use_state(DecisionState::new);
    let dispatch = dispatch_handler(props.scenarios.clone(), state.clone());

    match build_decision_screen(&props.scenarios, &state, &props.topic) {
        DecisionScreen::Results(vm) => html! {
            <ResultsPanel
                score={vm.score}
                total={vm.total}
                theme={vm.theme}
                on_restart={restart_handler(&dispatch)}
            />
        },
        DecisionScreen::Scenario(vm) => scenario_view(vm, &dispatch),
    }
}

fn scenario_view(vm: ScenarioViewModel, dispatch: &Callback<DecisionAction>) -> Html {
    let choices = match vm.feedback {
        Some(feedback) => html! {
            <FeedbackPanel
                view={feedback}
                next_label={AttrValue::from(vm.next_label)}
                on_next={advance_handler(dispatch)}
            />
        },
        None => {
            let on_select = select_handler(dispatch);
            html! {
                <div class="decision-options space-y-4">
                    <p class="text-slate-400 text-sm font-bold uppercase tracking-wider mb-2">
                        { "Select your course of action:" }
                    </p>
                    { for vm.options.into_iter().map(|option| html! {
                        <DecisionOptionButton
                            key={option.index}
                            index={option.index}
                            label={AttrValue::from(option.label)}
                            on_select={on_select.clone()}
                        />
                    }) }
                </div>
            }
        }
    };

    html! {
        <section class="decision-game w-full h-full flex flex-col items-center justify-center max-w-6xl mx-auto overflow-x-hidden">
            <div class="w-full grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-12">
                <div class="flex flex-col justify-center space-y-6">
                    <div class={classes!("decision-counter", "inline-flex", "items-center", "px-3", "py-1", "rounded-full", "border", "border-white/10", "bg-black/40", "w-fit", "font-mono", "text-xs", "uppercase", "tracking-widest", vm.theme.accent)}>
                        <span class="icon icon-alert-triangle w-4 h-4 mr-2" aria-hidden="true"></span>
                        { vm.counter }
                    </div>
                    <h2 class="decision-title text-3xl md:text-5xl font-black text-white leading-tight">
                        { vm.title }
                    </h2>
                    <div class="p-6 bg-white/5 border-l-4 border-white/20 rounded-r-2xl">
                        <p class="decision-prompt text-lg md:text-xl text-slate-200 leading-relaxed font-medium">
                            { vm.prompt }
                        </p>
                    </div>
                    <div class="w-full bg-white/10 h-1.5 rounded-full overflow-hidden mt-4">
                        <div class={classes!("decision-progress", "h-full", "transition-all", "duration-500", vm.theme.bg)}
                             style={vm.progress_style}></div>
                    </div>
                </div>
                <div class="flex flex-col gap-4 justify-center">
                    { choices }
                </div>
            </div>
        </section>
    }
}
