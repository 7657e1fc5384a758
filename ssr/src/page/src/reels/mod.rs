mod slide;

use component::{
    feed_status::{FeedEmpty, FeedFailed},
    spinner::Spinner,
};
use consts::{APP_NAME, SCROLL_THROTTLE};
use leptos::{ev, html, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_throttle_fn};
use state::feed::{viewport::nearest_index, FeedFooter, FeedHandle, FeedState, FeedView};
use utils::{
    api::ApiClient,
    feed::{provider::Listing, Reel},
};
use wasm_bindgen::JsCast;

use crate::feed_tasks;
use slide::ReelSlide;

/// Top offsets of the slides inside the scroll container, in render order.
fn slide_offsets(root: &web_sys::Element) -> Vec<f64> {
    let children = root.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter(|el| el.has_attribute("data-slide"))
        .filter_map(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| el.offset_top() as f64)
        .collect()
}

#[component]
pub fn ReelsPage() -> impl IntoView {
    let feed = FeedHandle::<Reel>::new();
    let listing = Listing::reels(ApiClient::default());
    let scroll_root = NodeRef::<html::Div>::new();

    let initial_listing = listing.clone();
    Effect::new(move |_| feed_tasks::load_initial(&initial_listing, feed));

    let scroll_listing = listing.clone();
    let recompute_active = move || {
        let Some(root) = scroll_root.get_untracked() else {
            return;
        };
        let offsets = slide_offsets(&root);
        if let Some(idx) = nearest_index(&offsets, root.scroll_top() as f64) {
            feed.set_active(idx);
        }
        feed_tasks::load_more_if_near_end(&scroll_listing, feed);
    };
    let throttled = use_throttle_fn(recompute_active, SCROLL_THROTTLE.as_millis() as f64);

    // Lookahead also fires without a scroll event, e.g. after a short page.
    let wants_more = Memo::new(move |_| feed.read(FeedState::wants_more));
    let eager_listing = listing.clone();
    Effect::new(move |_| {
        if wants_more.get() {
            feed_tasks::load_more(&eager_listing, feed);
        }
    });
    _ = use_event_listener(scroll_root, ev::scroll, move |_| {
        throttled();
    });

    let retry_listing = listing.clone();
    let status = move || match feed.read(FeedState::view) {
        FeedView::Items => ().into_any(),
        FeedView::Loading => view! {
            <div class="flex justify-center items-center w-full h-dvh snap-start">
                <Spinner />
            </div>
        }
        .into_any(),
        FeedView::Empty => view! {
            <div class="w-full h-dvh snap-start">
                <FeedEmpty message="No reels yet." />
            </div>
        }
        .into_any(),
        FeedView::Failed(e) => {
            let listing = retry_listing.clone();
            view! {
                <div class="w-full h-dvh snap-start">
                    <FeedFailed
                        message=e.to_string()
                        on_retry=move || feed_tasks::load_initial(&listing, feed)
                    />
                </div>
            }
            .into_any()
        }
    };

    let at_end = move || feed.read(|s| s.footer() == FeedFooter::End);

    view! {
        <Title text=format!("{APP_NAME} - Reels") />
        <div class="overflow-hidden w-full h-full">
            <div
                node_ref=scroll_root
                class="relative overflow-y-scroll bg-black snap-mandatory snap-y h-dvh w-dvw"
                style:scroll-snap-points-y="repeat(100vh)"
            >
                {status}
                <For
                    each=move || feed.read(|s| 0..s.len())
                    key=|idx| *idx
                    children=move |idx| {
                        view! { <ReelSlide idx feed listing=listing.clone() /> }
                    }
                />
                <Show when=at_end>
                    <div class="flex justify-center items-center w-full h-full text-xl bg-inherit z-21 snap-always snap-end text-white/80">
                        <span>"You have reached the end!"</span>
                    </div>
                </Show>
            </div>
        </div>
    }
}
