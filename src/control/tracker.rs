use glam::Vec2;

/// Screen-space differencing for one drag gesture.
///
/// Holds the gesture's start and end points; each move produces the
/// `end − start` delta and rolls `end` into `start`, so deltas are
/// frame-to-frame rather than cumulative from the gesture origin. The
/// zoom gesture stores its 1D pinch distance as `(0, distance)` so the
/// same differencing applies.
#[derive(Debug, Default)]
pub(crate) struct DragTracker {
    start: Vec2,
    end: Vec2,
}

impl DragTracker {
    /// Seed the tracker at a gesture's starting point.
    pub(crate) fn begin(&mut self, point: Vec2) {
        self.start = point;
        self.end = point;
    }

    /// Record a move and return the delta since the previous point.
    pub(crate) fn advance(&mut self, point: Vec2) -> Vec2 {
        self.end = point;
        let delta = self.end - self.start;
        self.start = self.end;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_are_frame_to_frame() {
        let mut tracker = DragTracker::default();
        tracker.begin(Vec2::new(10.0, 10.0));

        let d1 = tracker.advance(Vec2::new(13.0, 14.0));
        assert_eq!(d1, Vec2::new(3.0, 4.0));

        // The second delta is measured from the previous move, not from
        // the gesture origin.
        let d2 = tracker.advance(Vec2::new(13.0, 10.0));
        assert_eq!(d2, Vec2::new(0.0, -4.0));
    }

    #[test]
    fn begin_resets_the_reference_point() {
        let mut tracker = DragTracker::default();
        tracker.begin(Vec2::new(5.0, 5.0));
        let _ = tracker.advance(Vec2::new(50.0, 50.0));

        tracker.begin(Vec2::new(100.0, 100.0));
        let d = tracker.advance(Vec2::new(101.0, 100.0));
        assert_eq!(d, Vec2::new(1.0, 0.0));
    }
}
