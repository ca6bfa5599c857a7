use crate::components::ui::decision_game::DecisionGame;
use crate::components::ui::flood_game::FloodGame;
use crate::game::{
    DecisionDeck, GameType, Lecture, LectureCatalog, StyleConfig, load_bundled_catalog,
};
use std::rc::Rc;
use yew::prelude::*;

/// Lecture plus the validated deck its decision game runs on.
#[derive(Debug, Clone, PartialEq)]
pub struct LectureEntry {
    pub lecture: Lecture,
    pub deck: Option<Rc<DecisionDeck>>,
}

#[must_use]
pub fn build_entries(catalog: &LectureCatalog) -> Vec<LectureEntry> {
    catalog
        .iter()
        .map(|lecture| {
            let deck = match lecture.decision_deck() {
                Ok(deck) => deck.map(Rc::new),
                Err(err) => {
                    log::warn!("Decision game disabled: {err}");
                    None
                }
            };
            LectureEntry {
                lecture: lecture.clone(),
                deck,
            }
        })
        .collect()
}

/// Root inline style: body font and the brand accent as a CSS variable.
#[must_use]
pub fn app_style(config: &StyleConfig) -> String {
    let font = config.font_stack("sans").unwrap_or_default();
    let brand = config.brand_shade(500).unwrap_or_default();
    format!("font-family: {font}; --brand-500: {brand};")
}

#[derive(Properties, Clone, PartialEq)]
pub struct LectureViewProps {
    pub entry: LectureEntry,
    pub simulator_requested: bool,
    pub on_launch: Callback<()>,
}

#[function_component(LectureView)]
pub fn lecture_view(p: &LectureViewProps) -> Html {
    let lecture = &p.entry.lecture;
    let decision = p.entry.deck.clone().map_or_else(
        || html! {},
        |deck| {
            html! {
                <DecisionGame
                    key={lecture.id.clone()}
                    scenarios={deck}
                    topic={AttrValue::from(lecture.topic.as_str())}
                />
            }
        },
    );
    let simulator = if lecture.game_type == GameType::FloodSim {
        html! {
            <div class="lecture-simulator">
                <FloodGame on_play_click={Some(p.on_launch.clone())} />
                if p.simulator_requested {
                    <p class="simulator-status muted" aria-live="polite">{ "Flood simulator requested" }</p>
                }
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <article class="lecture" data-lecture={lecture.id.clone()}>
            <header>
                <h1 class="lecture-title">{ lecture.title.clone() }</h1>
                <p class="muted">{ lecture.description.clone() }</p>
            </header>
            { simulator }
            { decision }
        </article>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let entries = use_memo((), |_| build_entries(&load_bundled_catalog()));
    let selected = use_state(|| 0_usize);
    let simulator_requested = use_state(|| false);

    let nav = entries.iter().enumerate().map(|(idx, entry)| {
        let onclick = {
            let selected = selected.clone();
            let simulator_requested = simulator_requested.clone();
            Callback::from(move |_: MouseEvent| {
                selected.set(idx);
                simulator_requested.set(false);
            })
        };
        let active = *selected == idx;
        html! {
            <li>
                <button type="button"
                        {onclick}
                        aria-current={ if active { Some("page") } else { None } }
                        class={classes!("lecture-tab", active.then_some("active"))}>
                    { entry.lecture.title.clone() }
                </button>
            </li>
        }
    });

    let body = entries.get(*selected).map_or_else(
        || html! { <p class="muted">{ "No lectures available." }</p> },
        |entry| {
            let on_launch = {
                let simulator_requested = simulator_requested.clone();
                let lecture_id = entry.lecture.id.clone();
                Callback::from(move |()| {
                    log::info!("Launching flood simulator for lecture {lecture_id}");
                    simulator_requested.set(true);
                })
            };
            html! {
                <LectureView
                    entry={entry.clone()}
                    simulator_requested={*simulator_requested}
                    on_launch={on_launch}
                />
            }
        },
    );

    html! {
        <main class="app" style={app_style(&StyleConfig::standard())}>
            <nav aria-label="Lectures"><ul class="lecture-tabs">{ for nav }</ul></nav>
            { body }
        </main>
    }
}
