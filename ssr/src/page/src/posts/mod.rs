use component::{
    action_buttons::{CommentButton, LikeButton},
    feed_status::{FeedEmpty, FeedFailed, FeedFooterView, FeedLoading},
    load_more_sentinel::LoadMoreSentinel,
};
use consts::{APP_NAME, POSTS_PATH};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_navigate, NavigateOptions};
use state::{
    feed::{FeedHandle, FeedState, FeedView},
    session::AuthState,
};
use utils::{
    api::ApiClient,
    feed::{provider::Listing, MediaKind, MediaRef, Post},
    media::media_url,
    route::{post_path, profile_path},
    time::relative_to_now,
};

use crate::feed_tasks;

#[component]
fn PostMedia(media: MediaRef) -> impl IntoView {
    let src = media_url(media.url())?;
    Some(match media.kind() {
        MediaKind::Video => view! {
            <video src=src class="w-full rounded-lg bg-neutral-900" controls playsinline preload="metadata"></video>
        }
        .into_any(),
        MediaKind::Image | MediaKind::Other => view! {
            <img src=src class="w-full rounded-lg object-cover bg-neutral-900" loading="lazy" />
        }
        .into_any(),
    })
}

#[component]
fn PostCard(idx: usize, feed: FeedHandle<Post>, listing: Listing<Post>) -> impl IntoView {
    let post = Memo::new(move |_| feed.read(|s| s.items().get(idx).cloned()));
    let auth = AuthState::get();
    let navigate = use_navigate();
    let nav_for_like = navigate.clone();

    let on_like = move || {
        let Some(key) = post.with_untracked(|p| p.as_ref().map(|p| p.id.clone())) else {
            return;
        };
        let session = auth.status.get_untracked();
        let navigate = nav_for_like.clone();
        feed_tasks::toggle_like(
            &listing,
            feed,
            &session,
            move |path| navigate(path, NavigateOptions::default()),
            POSTS_PATH,
            &key,
        );
    };
    let on_comment = move || {
        if let Some(id) = post.with_untracked(|p| p.as_ref().map(|p| p.id.clone())) {
            navigate(&post_path(&id), NavigateOptions::default());
        }
    };

    let liked = Signal::derive(move || post.with(|p| p.as_ref().is_some_and(|p| p.viewer_has_liked)));
    let likes = Signal::derive(move || post.with(|p| p.as_ref().map_or(0, |p| p.likes_count)));
    let comments = Signal::derive(move || post.with(|p| p.as_ref().map_or(0, |p| p.comments_count)));
    let pending = Signal::derive(move || {
        post.with(|p| p.as_ref().is_some_and(|p| feed.read(|s| s.like_pending(&p.id))))
    });

    let header = move || {
        post.with(|p| {
            let p = p.as_ref()?;
            let avatar = p.author.avatar_url.as_deref().and_then(media_url);
            let name = p.author.display_name().to_string();
            let href = profile_path(&p.author.username);
            let age = relative_to_now(p.created_at);
            Some(view! {
                <div class="flex items-center gap-3">
                    <div class="size-10 shrink-0 rounded-full bg-neutral-800">
                        {avatar.map(|src| view! { <img src=src class="size-10 rounded-full object-cover" /> })}
                    </div>
                    <div class="flex flex-col">
                        <A href=href attr:class="font-semibold text-neutral-50">{name}</A>
                        <span class="text-xs text-neutral-500">{age}</span>
                    </div>
                </div>
            })
        })
    };
    let content = move || post.with(|p| p.as_ref().map(|p| p.content.clone()).unwrap_or_default());
    let media = move || post.with(|p| p.as_ref().map(|p| p.media.clone()).unwrap_or_default());

    view! {
        <article class="flex flex-col gap-3 w-full p-4 border-b border-neutral-900">
            {header}
            <p class="whitespace-pre-wrap text-neutral-200">{content}</p>
            <div class="flex flex-col gap-2">
                {move || {
                    media()
                        .into_iter()
                        .map(|media| view! { <PostMedia media /> })
                        .collect_view()
                }}
            </div>
            <div class="flex gap-8 items-center">
                <LikeButton liked count=likes pending on_click=on_like />
                <CommentButton count=comments on_click=on_comment />
            </div>
        </article>
    }
}

#[component]
pub fn PostsPage() -> impl IntoView {
    let feed = FeedHandle::<Post>::new();
    let listing = Listing::posts(ApiClient::default());

    let initial_listing = listing.clone();
    Effect::new(move |_| feed_tasks::load_initial(&initial_listing, feed));

    let retry_listing = listing.clone();
    let more_listing = listing.clone();

    view! {
        <Title text=format!("{APP_NAME} - Posts") />
        <div class="flex flex-col items-center pb-12 w-screen min-h-screen text-white bg-black">
            <div class="flex flex-col mx-auto w-full max-w-2xl">
                {move || match feed.read(FeedState::view) {
                    FeedView::Loading => view! { <FeedLoading /> }.into_any(),
                    FeedView::Empty => view! { <FeedEmpty message="Nothing posted yet." /> }.into_any(),
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
                    each=move || feed.read(|s| 0..s.len())
                    key=|idx| *idx
                    children=move |idx| view! { <PostCard idx feed listing=listing.clone() /> }
                />
                <Show when=move || feed.read(|s| !s.is_empty())>
                    <LoadMoreSentinel len=Signal::derive(move || feed.read(FeedState::len)) on_visible={
                        let listing = more_listing.clone();
                        move || feed_tasks::load_more(&listing, feed)
                    } />
                </Show>
                <FeedFooterView
                    footer=Signal::derive(move || feed.read(FeedState::footer))
                    end_message="You're all caught up."
                />
            </div>
        </div>
    }
}
