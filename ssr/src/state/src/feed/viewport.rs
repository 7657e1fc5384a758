//! Geometry helpers for the snap-scrolling reel container.

use consts::{MEDIA_MOUNT_AHEAD, MEDIA_MOUNT_BEHIND};

/// Index of the slide whose top edge is closest to `position`.
/// Ties go to the lower index.
pub fn nearest_index(offsets: &[f64], position: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, offset) in offsets.iter().enumerate() {
        let dist = (offset - position).abs();
        if dist.is_nan() {
            continue;
        }
        match best {
            Some((_, best_dist)) if best_dist <= dist => {}
            _ => best = Some((idx, dist)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// `active` is within `lookahead` slides of the end of a non-empty list.
pub fn near_end(active: usize, len: usize, lookahead: usize) -> bool {
    len > 0 && len.saturating_sub(active) <= lookahead
}

/// Slides that keep their `<video>` element mounted around the active one.
pub fn in_media_window(idx: usize, active: usize) -> bool {
    idx + MEDIA_MOUNT_BEHIND >= active && idx <= active + MEDIA_MOUNT_AHEAD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_closest_offset() {
        let offsets = [0.0, 800.0, 1600.0, 2400.0];
        assert_eq!(nearest_index(&offsets, 0.0), Some(0));
        assert_eq!(nearest_index(&offsets, 800.0), Some(1));
        assert_eq!(nearest_index(&offsets, 1600.0), Some(2));
        assert_eq!(nearest_index(&offsets, 2400.0), Some(3));
        assert_eq!(nearest_index(&offsets, 1590.0), Some(2));
        assert_eq!(nearest_index(&offsets, 1250.0), Some(2));
        assert_eq!(nearest_index(&offsets, 9999.0), Some(3));
    }

    #[test]
    fn ties_resolve_to_lower_index() {
        assert_eq!(nearest_index(&[0.0, 800.0], 400.0), Some(0));
    }

    #[test]
    fn no_slides_no_index() {
        assert_eq!(nearest_index(&[], 100.0), None);
    }

    #[test]
    fn near_end_uses_remaining_count() {
        assert!(!near_end(17, 20, 2));
        assert!(near_end(18, 20, 2));
        assert!(near_end(19, 20, 2));
        assert!(near_end(0, 2, 2));
        assert!(!near_end(0, 0, 2));
    }

    #[test]
    fn media_window_bounds() {
        let mounted: Vec<_> = (0..12).filter(|idx| in_media_window(*idx, 5)).collect();
        let first = 5 - MEDIA_MOUNT_BEHIND;
        let last = 5 + MEDIA_MOUNT_AHEAD;
        assert_eq!(mounted, (first..=last).collect::<Vec<_>>());
        assert!(in_media_window(0, 0));
    }
}
