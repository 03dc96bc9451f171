use crate::config::Config;
use crate::lattice::Lattice;
use crate::physics;
use crate::pointer::PointerState;
use glam::Vec2;

/// Single owner of all mutable simulation state.
///
/// The render loop, input handlers, and resize/theme triggers all go
/// through one `Simulation`, so every frame has exactly one writer and
/// there is no ambient shared state. Nothing in here schedules itself:
/// [`Simulation::advance_frame`] advances exactly one frame, and whoever
/// drives the loop (the repaint cadence in the viewer, a plain `for` loop
/// in tests) decides when frames happen.
///
/// ### Fields
/// - `config` - Live tuning constants; safe to edit between frames. A
///   spacing change only takes effect at the next rebuild.
/// - `width`, `height` - Current surface size, set by [`Simulation::resize`].
/// - `lattice` - The point grid; discarded wholesale on every rebuild.
/// - `pointer` - Latest tracked pointer position.
pub struct Simulation {
    pub config: Config,
    width: f32,
    height: f32,
    lattice: Lattice,
    pointer: PointerState,
}

impl Simulation {
    pub fn new(width: f32, height: f32, config: Config) -> Self {
        Self {
            config,
            width,
            height,
            lattice: Lattice::build(width, height, config.spacing),
            pointer: PointerState::default(),
        }
    }

    pub fn surface_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer.pos()
    }

    pub fn pointer_on_surface(&self) -> bool {
        self.pointer.is_on_surface()
    }

    /// Rebuilds the lattice for a new surface size.
    ///
    /// The old lattice is discarded entirely (mid-flight deformation
    /// included). Shrinking below the pointer-width threshold also parks
    /// the pointer off-surface, so touch-sized surfaces really lose the
    /// interactive effect rather than reacting to stale coordinates.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.lattice = Lattice::build(width, height, self.config.spacing);
        if width <= self.config.pointer_min_width {
            self.pointer.reset();
        }
    }

    /// Rebuilds the lattice at the current surface size.
    ///
    /// Used by the theme-change trigger, which refreshes the lattice
    /// together with the palette re-read.
    pub fn rebuild(&mut self) {
        self.lattice = Lattice::build(self.width, self.height, self.config.spacing);
    }

    /// Accepts a pointer-move event, last-write-wins.
    ///
    /// Ignored while the surface is at or below `pointer_min_width`; on
    /// those surfaces the pointer stays at its off-surface default and
    /// the effect is dormant.
    pub fn track_pointer(&mut self, pos: Vec2) {
        if self.width > self.config.pointer_min_width {
            self.pointer.update(pos);
        }
    }

    /// Advances the whole lattice by one frame.
    ///
    /// The pointer is sampled once, up front, so all points in the frame
    /// see the same value.
    pub fn advance_frame(&mut self) {
        physics::step_lattice(&mut self.lattice, self.pointer.pos(), &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide_sim() -> Simulation {
        Simulation::new(1280.0, 720.0, Config::default())
    }

    #[test]
    fn new_builds_a_lattice_fitted_to_the_surface() {
        let sim = Simulation::new(800.0, 600.0, Config::default());
        let lat = sim.lattice();
        assert_eq!((lat.columns, lat.rows), (22, 17));
        assert_eq!(lat.points.len(), 374);
        assert_eq!(lat.edge_count(), 709);
        assert!(!sim.pointer_on_surface());
    }

    #[test]
    fn narrow_surfaces_ignore_pointer_motion() {
        let mut sim = Simulation::new(600.0, 900.0, Config::default());
        sim.track_pointer(Vec2::new(300.0, 300.0));
        assert_eq!(sim.pointer(), PointerState::OFF_SURFACE);

        // The threshold itself is still too narrow.
        let mut edge = Simulation::new(768.0, 900.0, Config::default());
        edge.track_pointer(Vec2::new(300.0, 300.0));
        assert!(!edge.pointer_on_surface());
    }

    #[test]
    fn wide_surfaces_track_the_pointer() {
        let mut sim = wide_sim();
        sim.track_pointer(Vec2::new(640.0, 360.0));
        assert_eq!(sim.pointer(), Vec2::new(640.0, 360.0));
        assert!(sim.pointer_on_surface());
    }

    #[test]
    fn stale_pointer_coordinates_persist_between_events() {
        let mut sim = wide_sim();
        sim.track_pointer(Vec2::new(640.0, 360.0));

        // No further move events: every frame keeps reading the last
        // coordinates, so the deformation stays anchored there.
        for _ in 0..30 {
            sim.advance_frame();
        }

        assert_eq!(sim.pointer(), Vec2::new(640.0, 360.0));
        assert!(sim.pointer_on_surface());
    }

    #[test]
    fn advance_frame_deforms_points_near_the_pointer() {
        let mut sim = wide_sim();

        // Park the pointer on a rest position so at least that point is
        // guaranteed to be inside the radius.
        let target = sim.lattice().point(5, 5).unwrap().origin;
        sim.track_pointer(target);
        sim.advance_frame();

        let moved = sim.lattice().point(5, 5).unwrap();
        assert!(moved.displacement().length() > 0.0);

        // Edges are enumerated from the freshly stepped positions; the
        // frame never draws a stale lattice.
        let idx = sim.lattice().point_index(5, 5);
        let expect = sim.lattice().points[idx].pos;
        let touching = sim
            .lattice()
            .edges()
            .filter(|(a, b)| *a == expect || *b == expect)
            .count();
        assert!(touching > 0);
    }

    #[test]
    fn resize_discards_all_deformation() {
        let mut sim = wide_sim();
        sim.track_pointer(Vec2::new(200.0, 200.0));
        for _ in 0..10 {
            sim.advance_frame();
        }
        assert!(
            sim.lattice()
                .points
                .iter()
                .any(|p| p.displacement() != Vec2::ZERO)
        );

        sim.resize(1920.0, 1080.0);

        assert_eq!(sim.surface_size(), Vec2::new(1920.0, 1080.0));
        assert!(
            sim.lattice()
                .points
                .iter()
                .all(|p| p.displacement() == Vec2::ZERO && p.vel == Vec2::ZERO)
        );
        // A wide-to-wide resize keeps the last pointer position.
        assert_eq!(sim.pointer(), Vec2::new(200.0, 200.0));
    }

    #[test]
    fn shrinking_below_the_threshold_parks_the_pointer() {
        let mut sim = wide_sim();
        sim.track_pointer(Vec2::new(200.0, 200.0));
        assert!(sim.pointer_on_surface());

        sim.resize(600.0, 900.0);
        assert_eq!(sim.pointer(), PointerState::OFF_SURFACE);
    }

    #[test]
    fn rebuild_resets_points_and_keeps_the_surface() {
        let mut sim = wide_sim();
        sim.track_pointer(Vec2::new(100.0, 100.0));
        for _ in 0..5 {
            sim.advance_frame();
        }

        sim.rebuild();

        assert_eq!(sim.surface_size(), Vec2::new(1280.0, 720.0));
        assert!(
            sim.lattice()
                .points
                .iter()
                .all(|p| p.displacement() == Vec2::ZERO)
        );
    }

    #[test]
    fn rebuild_picks_up_a_changed_spacing() {
        let mut sim = wide_sim();
        let before = sim.lattice().columns;

        sim.config.spacing = 80.0;
        sim.rebuild();

        assert_eq!(sim.lattice().spacing, 80.0);
        assert!(sim.lattice().columns < before);
    }
}
