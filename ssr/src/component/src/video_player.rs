use leptos::html::Video;
use leptos::prelude::*;

#[component]
pub fn VideoPlayer(
    #[prop(optional)] node_ref: NodeRef<Video>,
    #[prop(into)] poster: Signal<Option<String>>,
    #[prop(into)] src: Signal<Option<String>>,
    #[prop(into)] muted: Signal<bool>,
    on_tap: impl Fn() + 'static,
) -> impl IntoView {
    // the `muted` attribute is only read on first render
    Effect::new(move |_| {
        let vid = node_ref.get()?;
        vid.set_muted(muted.get());
        Some(())
    });

    view! {
        <label class="h-full w-full absolute top-0 left-0 grid grid-cols-1 justify-items-center items-center cursor-pointer z-3">
            <video
                node_ref=node_ref
                class="object-contain h-dvh max-h-dvh cursor-pointer"
                poster=poster
                src=src
                loop
                muted
                playsinline
                disablepictureinpicture
                disableremoteplayback
                preload="metadata"
                on:click=move |_| on_tap()
            ></video>
        </label>
    }
}
