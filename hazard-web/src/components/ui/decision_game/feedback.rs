use super::view_model::FeedbackView;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FeedbackPanelProps {
    pub view: FeedbackView,
    pub next_label: AttrValue,
    pub on_next: Callback<()>,
}

#[function_component(FeedbackPanel)]
pub fn feedback_panel(p: &FeedbackPanelProps) -> Html {
    let view = &p.view;
    let on_click = {
        let on_next = p.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    let correct_protocol = view.correct_label.clone().map_or_else(
        || html! {},
        |label| {
            html! {
                <div class="correct-protocol p-4 rounded-xl bg-white/5 border border-white/10">
                    <p class="text-sm text-slate-400 uppercase font-bold mb-1">{ "Correct Protocol:" }</p>
                    <p class="text-slate-200">{ label }</p>
                </div>
            }
        },
    );

    html! {
        <div class="decision-feedback space-y-6" aria-live="polite">
            <div class={classes!("p-6", "rounded-2xl", "border-2", "flex", "items-start", "gap-4", view.panel_class)}>
                <span class={classes!("icon", "w-8", "h-8", "flex-shrink-0", view.icon_class)} aria-hidden="true"></span>
                <div>
                    <h3 class={classes!("text-xl", "font-black", "uppercase", "mb-2", view.heading_class)}>
                        { view.heading }
                    </h3>
                    <p class="text-slate-200 text-lg leading-relaxed">{ view.feedback.clone() }</p>
                </div>
            </div>
            { correct_protocol }
            <button type="button"
                    onclick={on_click}
                    class={classes!("decision-next", "w-full", "py-4", "rounded-xl", "font-bold", "uppercase", "tracking-widest", "text-white", "shadow-lg", view.next_button_class)}>
                { p.next_label.clone() }
            </button>
        </div>
    }
}
