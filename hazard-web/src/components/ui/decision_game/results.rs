use crate::game::Theme;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ResultsPanelProps {
    pub score: u32,
    pub total: usize,
    pub theme: Theme,
    pub on_restart: Callback<()>,
}

#[function_component(ResultsPanel)]
pub fn results_panel(p: &ResultsPanelProps) -> Html {
    let on_click = {
        let on_restart = p.on_restart.clone();
        Callback::from(move |_: MouseEvent| on_restart.emit(()))
    };

    html! {
        <section class="decision-results w-full h-full flex flex-col items-center justify-center p-8 bg-black/40 backdrop-blur-xl border border-white/10 rounded-3xl text-center shadow-2xl">
            <span class={classes!("icon", "icon-activity", "w-16", "h-16", "mb-6", p.theme.accent)} aria-hidden="true"></span>
            <h2 class="text-3xl md:text-5xl font-black text-white uppercase mb-4">{ "Simulation Complete" }</h2>
            <p class="text-slate-300 text-xl mb-8">
                { "You made the right call in " }
                <span class={classes!("decision-score", "font-bold", "text-2xl", p.theme.accent)}>{ p.score.to_string() }</span>
                { format!(" out of {} scenarios.", p.total) }
            </p>
            <button type="button"
                    onclick={on_click}
                    class={classes!("decision-restart", "px-8", "py-3", "rounded-xl", "font-bold", "uppercase", "tracking-widest", "text-white", "shadow-lg", "flex", "items-center", "hover:brightness-110", p.theme.bg)}>
                <span class="icon icon-refresh w-5 h-5 mr-2" aria-hidden="true"></span>
                { "Restart Simulation" }
            </button>
        </section>
    }
}
