pub mod audio_state;
pub mod feed;
pub mod session;
