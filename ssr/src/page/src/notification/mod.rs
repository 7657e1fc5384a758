use component::{
    feed_status::{FeedEmpty, FeedFailed, FeedFooterView, FeedLoading},
    load_more_sentinel::LoadMoreSentinel,
};
use consts::APP_NAME;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use state::feed::{FeedHandle, FeedState, FeedView};
use state::session::{AuthState, SessionStatus};
use utils::{
    api::ApiClient,
    feed::{provider::Listing, Notification},
    media::media_url,
    route::login_redirect,
    time::relative_to_now,
};

use crate::feed_tasks;

#[component]
fn NotificationItem(notif: Notification) -> impl IntoView {
    let summary = notif.summary();
    let age = relative_to_now(notif.created_at);
    let avatar = notif
        .actor
        .as_ref()
        .and_then(|a| a.avatar_url.as_deref())
        .and_then(media_url);
    let target = notif.target_path();
    let unread = !notif.read;

    let nav = use_navigate();
    let on_click = move |_| {
        if let Some(target) = &target {
            nav(target, NavigateOptions::default());
        }
    };

    view! {
        <div
            class="bg-black w-full p-4 border-b border-neutral-900 cursor-pointer"
            on:click=on_click
        >
            <div class="flex items-center gap-3">
                <div class="size-11 shrink-0 rounded-full bg-neutral-800 relative">
                    {avatar.map(|src| view! { <img src=src class="size-11 rounded-full object-cover" /> })}
                    <Show when=move || unread>
                        <div class="size-2 rounded-full bg-pink-700 absolute -left-4 top-5"></div>
                    </Show>
                </div>
                <div class="flex flex-col gap-1 min-w-0">
                    <div class="text-neutral-50 font-semibold line-clamp-2">{summary}</div>
                    <div class="text-neutral-500 text-sm">{age}</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SignInPrompt() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 items-center py-16 px-8 text-center">
            <div class="text-neutral-300">"Sign in to see your notifications."</div>
            <A
                href=login_redirect(consts::NOTIFICATIONS_PATH)
                attr:class="px-6 py-3 bg-pink-600 hover:bg-pink-700 text-white font-medium rounded-lg transition-colors"
            >
                "Sign in"
            </A>
        </div>
    }
}

#[component]
fn NotificationList(feed: FeedHandle<Notification>, listing: Listing<Notification>) -> impl IntoView {
    let retry_listing = listing.clone();
    let more_listing = listing;

    view! {
        {move || match feed.read(FeedState::view) {
            FeedView::Loading => view! { <FeedLoading rows=6 /> }.into_any(),
            FeedView::Empty => view! { <FeedEmpty message="You're all caught up." /> }.into_any(),
            FeedView::Failed(e) => {
                let listing = retry_listing.clone();
                view! {
                    <FeedFailed
                        message=e.to_string()
                        on_retry=move || feed_tasks::load_initial(&listing, feed)
                    />
                }
                .into_any()
            }
            FeedView::Items => ().into_any(),
        }}
        <For
            each=move || feed.read(|s| s.items().iter().cloned().enumerate().collect::<Vec<_>>())
            key=|(idx, notif)| (*idx, notif.id.clone(), notif.read)
            children=move |(_, notif)| view! { <NotificationItem notif /> }
        />
        <Show when=move || feed.read(|s| !s.is_empty())>
            <LoadMoreSentinel len=Signal::derive(move || feed.read(FeedState::len)) on_visible={
                let listing = more_listing.clone();
                move || feed_tasks::load_more(&listing, feed)
            } />
        </Show>
        <FeedFooterView footer=Signal::derive(move || feed.read(FeedState::footer)) end_message="No older notifications." />
    }
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let page_title = format!("{APP_NAME} - Notifications");
    let auth = AuthState::get();
    let feed = FeedHandle::<Notification>::new();
    let listing = Listing::notifications(ApiClient::default());

    let initial_listing = listing.clone();
    Effect::new(move |_| {
        if auth.status.with(SessionStatus::is_authenticated) {
            feed_tasks::load_initial(&initial_listing, feed);
        }
    });

    view! {
        <Title text=page_title />
        <div class="flex flex-col items-center pt-4 pb-12 w-screen min-h-screen text-white bg-black h-full">
            <div class="sticky top-0 z-10 w-full bg-black px-4 py-3">
                <span class="text-xl font-bold">Notifications</span>
            </div>
            <div class="flex overflow-hidden overflow-y-auto flex-col pb-32 mx-auto mt-2 w-full max-w-5xl h-full">
                {move || match auth.status.get() {
                    SessionStatus::Resolving => view! { <FeedLoading rows=6 /> }.into_any(),
                    SessionStatus::Anonymous => view! { <SignInPrompt /> }.into_any(),
                    SessionStatus::Authenticated(_) => {
                        view! { <NotificationList feed listing=listing.clone() /> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
