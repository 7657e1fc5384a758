use leptos::prelude::*;
use leptos_icons::*;

/// Slide-out mute toggle pinned to the left edge of a slide.
#[component]
pub fn MuteUnmuteButton(#[prop(into)] muted: Signal<bool>, on_toggle: impl Fn() + 'static) -> impl IntoView {
    let text = move || if muted.get() { "Unmute" } else { "Mute" };

    view! {
        <button
            class="absolute z-10 rounded-r-lg bg-black/25 py-2 px-3 cursor-pointer text-sm font-medium gap-1 text-white top-[7rem] flex items-center left-0 hover:translate-x-0 -translate-x-2/3 transition-all focus:delay-1000"
            on:click=move |_| on_toggle()
        >
            <div class="w-[6ch] text-center">{text}</div>
            <Show
                when=move || muted.get()
                fallback=|| view! { <Icon attr:class="w-4 h-4" icon=icondata::BiVolumeFullSolid /> }
            >
                <Icon attr:class="w-4 h-4" icon=icondata::BiVolumeMuteSolid />
            </Show>
        </button>
    }
}
