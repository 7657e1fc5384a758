use consts::{APP_NAME, NOTIFICATIONS_PATH, POSTS_PATH, REELS_PATH};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use page::{notification::NotificationsPage, posts::PostsPage, reels::ReelsPage};
use state::{audio_state::AudioState, session::AuthState};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2 justify-center items-center w-dvw h-dvh text-white bg-black">
            <span class="text-2xl font-bold">"404"</span>
            <span class="text-neutral-400">"Nothing to see here."</span>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    AuthState::register_global();
    AudioState::register_global();

    // path constants are absolute, segments are not
    let reels = StaticSegment(REELS_PATH.trim_start_matches('/'));
    let posts = StaticSegment(POSTS_PATH.trim_start_matches('/'));
    let notifications = StaticSegment(NOTIFICATIONS_PATH.trim_start_matches('/'));

    view! {
        <Stylesheet id="leptos" href="/pkg/reels-web.css" />
        <Title text=APP_NAME />
        <Router>
            <main class="bg-black min-h-dvh">
                <Routes fallback=NotFound>
                    <Route path=StaticSegment("") view=ReelsPage />
                    <Route path=reels view=ReelsPage />
                    <Route path=posts view=PostsPage />
                    <Route path=StaticSegment("feed") view=PostsPage />
                    <Route path=notifications view=NotificationsPage />
                </Routes>
            </main>
        </Router>
    }
}
