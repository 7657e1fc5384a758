//! Placeholder views shared by the reel, post and notification lists.

use leptos::prelude::*;
use leptos_icons::*;
use state::feed::FeedFooter;

use crate::spinner::Spinner;

#[component]
pub fn FeedLoading(#[prop(default = 3)] rows: usize) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 w-full p-4 animate-pulse" aria-busy="true">
            {(0..rows)
                .map(|_| {
                    view! {
                        <div class="flex gap-3 items-center">
                            <div class="size-10 rounded-full bg-neutral-800"></div>
                            <div class="flex flex-col flex-1 gap-2">
                                <div class="h-3 w-1/3 rounded bg-neutral-800"></div>
                                <div class="h-3 w-2/3 rounded bg-neutral-800"></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn FeedFailed(#[prop(into)] message: String, on_retry: impl Fn() + 'static) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 items-center justify-center w-full h-full py-16 px-8 text-center text-white">
            <Icon attr:class="text-4xl text-neutral-500" icon=icondata::BiErrorCircleRegular />
            <div class="text-neutral-300 text-sm">{message}</div>
            <button
                class="px-6 py-3 bg-pink-600 hover:bg-pink-700 text-white font-medium rounded-lg transition-colors"
                on:click=move |_| on_retry()
            >
                "Try again"
            </button>
        </div>
    }
}

#[component]
pub fn FeedEmpty(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center w-full h-full py-16 text-neutral-500 text-sm">
            {message}
        </div>
    }
}

/// Trailer under the last loaded row.
#[component]
pub fn FeedFooterView(
    #[prop(into)] footer: Signal<FeedFooter>,
    #[prop(into)] end_message: String,
) -> impl IntoView {
    move || match footer.get() {
        FeedFooter::None => ().into_any(),
        FeedFooter::LoadingMore => view! {
            <div class="w-full flex justify-center py-8">
                <Spinner label="Loading more..." />
            </div>
        }
        .into_any(),
        FeedFooter::LoadMoreFailed(e) => view! {
            <div class="w-full flex justify-center py-8 text-neutral-500 text-sm">
                {format!("Couldn't load more: {e}")}
            </div>
        }
        .into_any(),
        FeedFooter::End => view! {
            <div class="w-full flex justify-center py-8 text-neutral-500 text-sm">
                {end_message.clone()}
            </div>
        }
        .into_any(),
    }
}
