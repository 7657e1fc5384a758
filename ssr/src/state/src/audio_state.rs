use leptos::prelude::*;

/// Feed-wide mute preference. Every slide starts muted; unmuting one unmutes
/// the ones scrolled to afterwards.
#[derive(Clone, Copy, Debug)]
pub struct AudioState {
    pub muted: RwSignal<bool>,
}

impl Default for AudioState {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioState {
    pub fn new() -> Self {
        Self {
            muted: RwSignal::new(true),
        }
    }

    pub fn register_global() -> Self {
        let this = Self::new();
        provide_context(this);
        this
    }

    pub fn get() -> Self {
        match use_context() {
            Some(this) => this,
            None => Self::register_global(),
        }
    }

    pub fn toggle_mute(&self) {
        self.muted.update(|m| *m = !*m);
    }
}
