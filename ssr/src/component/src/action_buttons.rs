use leptos::prelude::*;
use leptos_icons::*;

#[component]
pub fn LikeButton(
    #[prop(into)] liked: Signal<bool>,
    #[prop(into)] count: Signal<u64>,
    #[prop(optional, into)] pending: Signal<bool>,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    let icon = move || {
        if liked.get() {
            icondata::AiHeartFilled
        } else {
            icondata::AiHeartOutlined
        }
    };

    view! {
        <button
            class="flex flex-col items-center gap-1 text-white drop-shadow-lg"
            class:opacity-60=move || pending.get()
            aria-pressed=move || liked.get().to_string()
            on:click=move |_| on_click()
        >
            <span class="text-3xl" class:text-pink-500=move || liked.get()>
                {move || view! { <Icon icon=icon() /> }}
            </span>
            <span class="text-xs font-semibold">{move || count.get()}</span>
        </button>
    }
}

#[component]
pub fn CommentButton(#[prop(into)] count: Signal<u64>, on_click: impl Fn() + 'static) -> impl IntoView {
    view! {
        <button
            class="flex flex-col items-center gap-1 text-white drop-shadow-lg"
            on:click=move |_| on_click()
        >
            <span class="text-3xl">
                <Icon icon=icondata::AiMessageOutlined />
            </span>
            <span class="text-xs font-semibold">{move || count.get()}</span>
        </button>
    }
}
