use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Default)]
pub struct Props {
    /// Invoked when the player asks to launch the external simulator.
    #[prop_or_default]
    pub on_play_click: Option<Callback<()>>,
}

fn launch(on_play_click: Option<&Callback<()>>) {
    match on_play_click {
        Some(cb) => cb.emit(()),
        None => log::debug!("Flood simulator launch requested with no host attached"),
    }
}

#[function_component(FloodGame)]
pub fn flood_game(p: &Props) -> Html {
    let onclick = {
        let on_play_click = p.on_play_click.clone();
        Callback::from(move |_: MouseEvent| launch(on_play_click.as_ref()))
    };

    html! {
        <div class="flood-game w-full h-[450px] lg:h-full min-h-[300px] relative rounded-xl overflow-hidden bg-black/80 border border-white/10 shadow-inner group">
            <div class="absolute inset-0 flex items-center justify-center text-slate-500 text-sm z-0 font-mono animate-pulse">
                { "Initializing Simulator..." }
            </div>
            <button type="button"
                    {onclick}
                    title="Play Flood Simulator"
                    class="flood-play absolute inset-0 flex items-center justify-center bg-black/30 hover:bg-black/40 transition-all group z-10 rounded-lg">
                <div class="flex flex-col items-center gap-3">
                    <div class="w-16 h-16 sm:w-20 sm:h-20 lg:w-24 lg:h-24 rounded-full bg-white/30 flex items-center justify-center group-hover:scale-110 transition-transform shadow-lg">
                        <span class="icon icon-play w-8 h-8 text-white ml-1" aria-hidden="true"></span>
                    </div>
                    <span class="text-white font-bold text-xs sm:text-sm lg:text-base uppercase tracking-wide">
                        { "Play Simulator" }
                    </span>
                </div>
            </button>
        </div>
    }
}
