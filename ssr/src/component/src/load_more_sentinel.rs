use leptos::html;
use leptos::prelude::*;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Invisible marker after the last row. Calls `on_visible` when it scrolls
/// into view, and again whenever `len` changes while it is still in view.
#[component]
pub fn LoadMoreSentinel(
    #[prop(into)] len: Signal<usize>,
    on_visible: impl Fn() + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let sentinel_ref = NodeRef::<html::Div>::new();
    let in_view = RwSignal::new(false);

    _ = use_intersection_observer_with_options(
        sentinel_ref,
        move |entries, _| {
            if let Some(entry) = entries.last() {
                in_view.set(entry.is_intersecting());
            }
        },
        UseIntersectionObserverOptions::default().root_margin("0px 0px 400px 0px"),
    );

    Effect::new(move |_| {
        len.track();
        if in_view.get() {
            on_visible();
        }
    });

    view! { <div node_ref=sentinel_ref class="h-px w-full" aria-hidden="true"></div> }
}
