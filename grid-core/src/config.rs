/// Tuning constants for the liquid-grid feel.
///
/// The defaults are the tuned values the page ships with; all of them are
/// safe to edit live between frames. `viscosity` and `damping` must stay small
/// (damping in `(0, 1)`) for the integration to remain stable — this is
/// a tuning invariant, not something enforced at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Distance between neighboring rest positions, in surface pixels.
    pub spacing: f32,
    /// Radius of pointer influence; also sizes the rendered glow.
    pub mouse_radius: f32,
    /// How hard the pointer pushes points away.
    pub mouse_strength: f32,
    /// Spring stiffness pulling each point back to its rest position.
    pub viscosity: f32,
    /// Per-frame multiplicative velocity decay, in `(0, 1)`.
    pub damping: f32,
    /// Minimum surface width for pointer tracking; narrower surfaces
    /// (touch-sized) keep the pointer parked off-surface.
    pub pointer_min_width: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spacing: 40.0,
            mouse_radius: 200.0,
            mouse_strength: 0.4,
            viscosity: 0.06,
            damping: 0.12,
            pointer_min_width: 768.0,
        }
    }
}
