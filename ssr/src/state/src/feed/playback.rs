//! Per-slide playback state machine.
//!
//! A slide only ever asks its `<video>` to play while it is the active slide
//! and not gated behind sign-in. Starting playback is asynchronous in the
//! browser, so a start request sits in [`PlayState::PlayRequested`] until the
//! element acknowledges or refuses it. A refusal (autoplay policy) drops back
//! to [`PlayState::Idle`] without retrying.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayState {
    #[default]
    Idle,
    PlayRequested,
    Playing,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    Activated,
    Deactivated,
    Gated,
    Ungated,
    StartAcknowledged,
    StartFailed,
    /// Viewer tapped pause.
    Pause,
    /// Viewer tapped play.
    Resume,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Playback {
    state: PlayState,
    muted: bool,
    gated: bool,
    active: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            state: PlayState::Idle,
            muted: true,
            gated: false,
            active: false,
        }
    }
}

impl Playback {
    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn gated(&self) -> bool {
        self.gated
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// The `<video>` should be asked to play.
    pub fn wants_playing(&self) -> bool {
        matches!(self.state, PlayState::PlayRequested | PlayState::Playing)
    }

    fn may_play(&self) -> bool {
        self.active && !self.gated
    }

    fn stop(&mut self) {
        if self.wants_playing() {
            self.state = PlayState::Paused;
        }
    }

    fn request_start(&mut self) {
        if self.may_play() && !self.wants_playing() {
            self.state = PlayState::PlayRequested;
        }
    }

    /// Returns whether the state changed.
    pub fn apply(&mut self, event: PlaybackEvent) -> bool {
        let before = *self;
        match event {
            PlaybackEvent::Activated => {
                self.active = true;
                self.request_start();
            }
            PlaybackEvent::Deactivated => {
                self.active = false;
                self.stop();
            }
            PlaybackEvent::Gated => {
                self.gated = true;
                self.stop();
            }
            PlaybackEvent::Ungated => {
                self.gated = false;
                self.request_start();
            }
            PlaybackEvent::StartAcknowledged => {
                if self.state == PlayState::PlayRequested {
                    self.state = PlayState::Playing;
                }
            }
            PlaybackEvent::StartFailed => {
                if self.state == PlayState::PlayRequested {
                    self.state = PlayState::Idle;
                }
            }
            PlaybackEvent::Pause => self.stop(),
            PlaybackEvent::Resume => self.request_start(),
        }
        *self != before
    }
}
