use glam::Vec2;

/// Latest known pointer position, in surface coordinates.
///
/// Starts far off-surface so no point is influenced before the first
/// input event arrives. Updates are last-write-wins: stale coordinates
/// persist until the next move event, exactly like the input source.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pos: Vec2,
}

impl PointerState {
    /// Resting value, far enough out that no sane repulsion radius
    /// reaches any surface point.
    pub const OFF_SURFACE: Vec2 = Vec2::new(-1000.0, -1000.0);

    pub fn update(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Parks the pointer back at [`PointerState::OFF_SURFACE`].
    pub fn reset(&mut self) {
        self.pos = Self::OFF_SURFACE;
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Whether the pointer has been seen over the surface; the glow pass
    /// keys off this.
    pub fn is_on_surface(&self) -> bool {
        self.pos.x > 0.0
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: Self::OFF_SURFACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_parked_off_surface() {
        let pointer = PointerState::default();
        assert_eq!(pointer.pos(), PointerState::OFF_SURFACE);
        assert!(!pointer.is_on_surface());
    }

    #[test]
    fn updates_are_last_write_wins() {
        let mut pointer = PointerState::default();
        pointer.update(Vec2::new(320.0, 240.0));
        pointer.update(Vec2::new(12.0, 700.0));
        assert_eq!(pointer.pos(), Vec2::new(12.0, 700.0));
    }

    #[test]
    fn on_surface_requires_positive_x() {
        let mut pointer = PointerState::default();

        pointer.update(Vec2::new(0.0, 100.0));
        assert!(!pointer.is_on_surface());

        pointer.update(Vec2::new(0.5, 100.0));
        assert!(pointer.is_on_surface());

        pointer.reset();
        assert!(!pointer.is_on_surface());
    }
}
