pub mod action_buttons;
pub mod feed_status;
pub mod load_more_sentinel;
pub mod locked_overlay;
pub mod mute_button;
pub mod spinner;
pub mod video_player;
