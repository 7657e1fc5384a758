use web_time::Duration;

/// Items from the end of the loaded list at which the next page is requested.
pub const LOAD_MORE_LOOKAHEAD: usize = 2;

/// Minimum gap between two active-slide recomputations while scrolling.
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(100);

/// Slides behind the active one that keep their `<video>` mounted.
pub const MEDIA_MOUNT_BEHIND: usize = 2;
/// Slides ahead of the active one that keep their `<video>` mounted.
pub const MEDIA_MOUNT_AHEAD: usize = 3;
