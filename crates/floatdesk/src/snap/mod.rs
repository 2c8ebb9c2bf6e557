//! Edge snapping
//!
//! While a window is dragged into a snap zone, a ghost preview shows the
//! geometry it would take on release. Releasing commits that geometry.

mod ghost;

pub use ghost::GhostSnap;

use crate::input::SnapZone;
use crate::math::{Rect, Size};

/// Candidate geometry for a snap zone, or None if nothing fits
///
/// Left and right zones split the desktop in half; when the window's
/// minimum size doesn't fit a half, the full-desktop geometry is used.
pub fn candidate_for(zone: SnapZone, area: Size, min_size: Size) -> Option<Rect> {
    let full = Rect::new(0.0, 0.0, area.width, area.height);
    let half_width = area.width / 2.0;

    let split = match zone {
        SnapZone::None => return None,
        SnapZone::Left => Some(Rect::new(0.0, 0.0, half_width, area.height)),
        SnapZone::Right => Some(Rect::new(half_width, 0.0, half_width, area.height)),
        SnapZone::Top => None,
    };

    if let Some(rect) = split.filter(|r| admits(r.size(), min_size)) {
        return Some(rect);
    }
    Some(full).filter(|r| !area.is_empty() && admits(r.size(), min_size))
}

fn admits(space: Size, min_size: Size) -> bool {
    min_size.width <= space.width && min_size.height <= space.height
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Size = Size::new(1200.0, 800.0);

    #[test]
    fn test_half_candidates() {
        let min = Size::new(300.0, 200.0);
        assert_eq!(
            candidate_for(SnapZone::Left, AREA, min),
            Some(Rect::new(0.0, 0.0, 600.0, 800.0))
        );
        assert_eq!(
            candidate_for(SnapZone::Right, AREA, min),
            Some(Rect::new(600.0, 0.0, 600.0, 800.0))
        );
    }

    #[test]
    fn test_top_is_full_area() {
        assert_eq!(
            candidate_for(SnapZone::Top, AREA, Size::new(300.0, 200.0)),
            Some(Rect::new(0.0, 0.0, 1200.0, 800.0))
        );
    }

    #[test]
    fn test_wide_window_falls_back_to_full() {
        let min = Size::new(700.0, 200.0);
        assert_eq!(
            candidate_for(SnapZone::Left, AREA, min),
            Some(Rect::new(0.0, 0.0, 1200.0, 800.0))
        );
    }

    #[test]
    fn test_nothing_fits() {
        let min = Size::new(1300.0, 200.0);
        assert_eq!(candidate_for(SnapZone::Right, AREA, min), None);
        assert_eq!(candidate_for(SnapZone::Left, Size::ZERO, Size::ZERO), None);
        assert_eq!(candidate_for(SnapZone::None, AREA, Size::ZERO), None);
    }
}
