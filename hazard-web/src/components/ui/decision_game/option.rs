use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct DecisionOptionProps {
    pub index: usize,
    pub label: AttrValue,
    pub on_select: Callback<usize>,
}

fn select_option(idx: usize, on_select: &Callback<usize>) {
    on_select.emit(idx);
}

#[function_component(DecisionOptionButton)]
pub fn decision_option_button(p: &DecisionOptionProps) -> Html {
    let idx = p.index;
    let on_click = {
        let on = p.on_select.clone();
        Callback::from(move |_: MouseEvent| select_option(idx, &on))
    };

    html! {
        <button type="button"
                data-key={idx.to_string()}
                onclick={on_click}
                class="decision-option w-full text-left p-6 rounded-2xl border-2 transition-all duration-300 group relative overflow-hidden bg-black/40 border-white/10 hover:border-white/40 hover:bg-white/5">
            <div class="flex items-center justify-between relative z-10">
                <span class="text-lg text-slate-100 font-bold group-hover:text-white">{ p.label.clone() }</span>
                <span class="icon icon-arrow-right w-5 h-5 text-slate-500 group-hover:text-white" aria-hidden="true"></span>
            </div>
        </button>
    }
}
