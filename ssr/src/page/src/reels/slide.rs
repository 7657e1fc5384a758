use component::{
    action_buttons::{CommentButton, LikeButton},
    locked_overlay::LockedOverlay,
    mute_button::MuteUnmuteButton,
    video_player::VideoPlayer,
};
use leptos::{html::Video, prelude::*};
use leptos_router::{
    components::A,
    hooks::{use_location, use_navigate},
    NavigateOptions,
};
use leptos_use::use_document_visibility;
use state::{
    audio_state::AudioState,
    feed::{
        playback::{PlayState, Playback, PlaybackEvent},
        viewport::in_media_window,
        FeedHandle,
    },
    session::{AuthState, SessionStatus},
};
use utils::{
    feed::{provider::Listing, Reel},
    media::media_url,
    route::{profile_path, reel_path},
};
use web_sys::VisibilityState;

use crate::feed_tasks;

/// Asks the element to play and feeds the outcome back into `playback`.
/// Outcomes of superseded attempts are dropped.
fn start_playback(
    vid: &web_sys::HtmlVideoElement,
    playback: RwSignal<Playback>,
    attempt: StoredValue<u32>,
) {
    let this_attempt = attempt.get_value().wrapping_add(1);
    attempt.set_value(this_attempt);

    let promise = match vid.play() {
        Ok(promise) => promise,
        Err(e) => {
            log::debug!("play() refused: {e:?}");
            playback.maybe_update(|p| p.apply(PlaybackEvent::StartFailed));
            return;
        }
    };
    wasm_bindgen_futures::spawn_local(async move {
        let event = match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => PlaybackEvent::StartAcknowledged,
            Err(e) => {
                log::debug!("autoplay rejected: {e:?}");
                PlaybackEvent::StartFailed
            }
        };
        if attempt.try_get_value() != Some(this_attempt) {
            return;
        }
        playback.try_update(|p| p.apply(event));
    });
}

#[component]
pub fn ReelSlide(idx: usize, feed: FeedHandle<Reel>, listing: Listing<Reel>) -> impl IntoView {
    let reel = Memo::new(move |_| feed.read(|s| s.items().get(idx).cloned()));
    let active_idx = Memo::new(move |_| feed.read(|s| s.active()));
    let is_active = Memo::new(move |_| active_idx.get() == idx);
    let mounted = Memo::new(move |_| in_media_window(idx, active_idx.get()));

    let auth = AuthState::get();
    let locked = Memo::new(move |_| auth.status.with(SessionStatus::gates_content));
    let audio = AudioState::get();
    let visibility = use_document_visibility();

    let playback = RwSignal::new(Playback::default());
    let attempt = StoredValue::new(0u32);
    let video_ref = NodeRef::<Video>::new();

    Effect::new(move |_| {
        let event = if is_active.get() {
            PlaybackEvent::Activated
        } else {
            PlaybackEvent::Deactivated
        };
        playback.maybe_update(|p| p.apply(event));
    });

    Effect::new(move |_| {
        let event = if locked.get() {
            PlaybackEvent::Gated
        } else {
            PlaybackEvent::Ungated
        };
        playback.maybe_update(|p| p.apply(event));
    });

    Effect::new(move |prev: Option<VisibilityState>| {
        let current = visibility.get();
        if prev.is_some_and(|prev| prev != current) {
            let event = match current {
                VisibilityState::Hidden => PlaybackEvent::Pause,
                _ => PlaybackEvent::Resume,
            };
            playback.maybe_update(|p| p.apply(event));
        }
        current
    });

    Effect::new(move |_| {
        let muted = audio.muted.get();
        playback.maybe_update(|p| {
            let changed = p.muted() != muted;
            p.set_muted(muted);
            changed
        });
    });

    // Drives the element from the state machine
    let play_state = Memo::new(move |_| playback.with(Playback::state));
    Effect::new(move |_| {
        let state = play_state.get();
        let Some(vid) = video_ref.get() else {
            return;
        };
        match state {
            PlayState::PlayRequested => start_playback(&vid, playback, attempt),
            PlayState::Playing => {}
            PlayState::Idle | PlayState::Paused => {
                _ = vid.pause();
            }
        }
    });

    let video_url =
        Signal::derive(move || reel.with(|r| r.as_ref().and_then(|r| media_url(&r.video_url))));
    let poster = Signal::derive(move || {
        reel.with(|r| {
            r.as_ref()?
                .thumbnail_url
                .as_deref()
                .and_then(media_url)
        })
    });
    let muted = Memo::new(move |_| playback.with(Playback::muted));

    let on_tap = move || {
        if playback.with_untracked(Playback::wants_playing) {
            audio.toggle_mute();
        } else {
            playback.maybe_update(|p| p.apply(PlaybackEvent::Resume));
        }
    };

    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let nav_for_like = navigate.clone();
    let on_like = move || {
        let Some(key) = reel.with_untracked(|r| r.as_ref().map(|r| r.id.clone())) else {
            return;
        };
        let session = auth.status.get_untracked();
        let next = pathname.get_untracked();
        let navigate = nav_for_like.clone();
        feed_tasks::toggle_like(
            &listing,
            feed,
            &session,
            move |path| navigate(path, NavigateOptions::default()),
            &next,
            &key,
        );
    };
    let on_comment = move || {
        if let Some(id) = reel.with_untracked(|r| r.as_ref().map(|r| r.id.clone())) {
            navigate(&format!("{}#comments", reel_path(&id)), NavigateOptions::default());
        }
    };

    let liked = Signal::derive(move || reel.with(|r| r.as_ref().is_some_and(|r| r.viewer_has_liked)));
    let likes = Signal::derive(move || reel.with(|r| r.as_ref().map_or(0, |r| r.likes_count)));
    let comments =
        Signal::derive(move || reel.with(|r| r.as_ref().map_or(0, |r| r.comments_count)));
    let like_pending = Signal::derive(move || {
        reel.with(|r| {
            r.as_ref()
                .is_some_and(|r| feed.read(|s| s.like_pending(&r.id)))
        })
    });

    let author_name = move || {
        reel.with(|r| {
            r.as_ref()
                .map(|r| r.author.display_name().to_string())
                .unwrap_or_default()
        })
    };
    let author_href = move || {
        reel.with(|r| {
            r.as_ref()
                .map(|r| profile_path(&r.author.username))
                .unwrap_or_default()
        })
    };
    let caption = move || reel.with(|r| r.as_ref().map(|r| r.caption.clone()).unwrap_or_default());

    view! {
        <div data-slide="" class="relative w-full h-dvh snap-always snap-start overflow-hidden bg-black">
            <div
                class="absolute top-0 left-0 w-full h-full bg-center bg-cover z-1 blur-lg"
                style:background-color="rgb(0, 0, 0)"
                style:background-image=move || poster.get().map(|url| format!("url({url})"))
            ></div>
            <Show
                when=move || !locked.get()
                fallback=move || {
                    view! { <LockedOverlay poster next=pathname.get_untracked() /> }
                }
            >
                <Show when=move || mounted.get()>
                    <VideoPlayer node_ref=video_ref poster src=video_url muted on_tap />
                </Show>
                <MuteUnmuteButton muted on_toggle=move || audio.toggle_mute() />
            </Show>
            <div class="flex absolute right-4 bottom-28 z-4 flex-col gap-6 items-center">
                <LikeButton liked count=likes pending=like_pending on_click=on_like />
                <CommentButton count=comments on_click=on_comment />
            </div>
            <div class="flex absolute bottom-0 left-0 z-4 flex-col gap-1 p-4 pr-20 w-full text-white bg-gradient-to-t from-black/70">
                <A href=author_href attr:class="font-semibold">
                    {author_name}
                </A>
                <p class="text-sm line-clamp-2 text-neutral-200">{caption}</p>
            </div>
        </div>
    }
}
