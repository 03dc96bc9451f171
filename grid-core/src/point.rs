use glam::Vec2;

/// One lattice node: an immutable rest position plus the moving state.
#[derive(Clone, Copy, Debug)]
pub struct GridPoint {
    pub origin: Vec2,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl GridPoint {
    /// A fresh point starts at rest: `pos == origin`, zero velocity.
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            pos: origin,
            vel: Vec2::ZERO,
        }
    }

    /// Current offset from the rest position.
    pub fn displacement(&self) -> Vec2 {
        self.pos - self.origin
    }
}
