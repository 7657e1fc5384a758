use leptos::prelude::*;
use leptos_icons::*;
use leptos_router::components::A;
use utils::route::login_redirect;

/// Stand-in for media the viewer has to sign in to see.
#[component]
pub fn LockedOverlay(
    #[prop(into)] poster: Signal<Option<String>>,
    #[prop(into)] next: String,
) -> impl IntoView {
    let href = login_redirect(&next);

    view! {
        <div class="absolute inset-0 z-5 flex items-center justify-center overflow-hidden bg-neutral-950">
            <div
                class="absolute inset-0 bg-center bg-cover blur-lg opacity-60"
                style:background-image=move || poster.get().map(|url| format!("url({url})"))
            ></div>
            <div class="relative flex flex-col items-center gap-4 px-8 text-center text-white">
                <Icon attr:class="text-4xl" icon=icondata::BiLockAltSolid />
                <div class="text-lg font-semibold">"Sign in to watch"</div>
                <div class="text-sm text-neutral-300">
                    "Create an account or log in to keep scrolling."
                </div>
                <A
                    href=href
                    attr:class="px-6 py-3 bg-pink-600 hover:bg-pink-700 text-white font-medium rounded-lg transition-colors"
                >
                    "Sign in"
                </A>
            </div>
        </div>
    }
}
