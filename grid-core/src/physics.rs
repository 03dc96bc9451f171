//! Per-frame physics for lattice points.
//!
//! Every frame runs [`step_point`] once for each point:
//! 1. Pointer repulsion — points inside `mouse_radius` receive an impulse
//!    directly away from the pointer, scaled by proximity.
//! 2. Spring restore — a linear pull back toward the point's rest
//!    position (`viscosity` is the stiffness).
//! 3. Damping — multiplicative velocity decay (`1 - damping`).
//! 4. Integration — explicit Euler with an implicit unit time step of one
//!    frame: `pos += vel`.
//!
//! Points are fully independent (no inter-point coupling), so the update
//! order over the lattice does not matter.

use crate::config::Config;
use crate::lattice::Lattice;
use crate::point::GridPoint;
use glam::Vec2;

/// Extra gain on the pointer impulse over the raw `mouse_strength`.
const REPEL_GAIN: f32 = 1.5;

/// Advances one point by one frame.
///
/// The proximity factor is `(mouse_radius - dist) / mouse_radius`, which
/// lies in `[0, 1]` and never divides by the distance itself, so a pointer
/// sitting exactly on the point still produces a finite impulse
/// (`atan2(0, 0)` is `0`, pushing along `-x`).
///
/// ### Parameters
/// - `point` - The point to mutate in place.
/// - `pointer` - Pointer position in surface coordinates, read once per
///   frame by the caller.
/// - `cfg` - Tuning constants; see [`Config`].
pub fn step_point(point: &mut GridPoint, pointer: Vec2, cfg: &Config) {
    let delta = pointer - point.pos;
    let dist = delta.length();

    if dist < cfg.mouse_radius {
        let angle = delta.y.atan2(delta.x);
        let force = (cfg.mouse_radius - dist) / cfg.mouse_radius;
        let move_force = force * cfg.mouse_strength * REPEL_GAIN;

        // Push away from the pointer.
        point.vel.x -= angle.cos() * move_force;
        point.vel.y -= angle.sin() * move_force;
    }

    // Linear spring back toward the rest position.
    let home = point.origin - point.pos;
    point.vel += home * cfg.viscosity;

    // Friction.
    point.vel *= 1.0 - cfg.damping;

    point.pos += point.vel;
}

/// Advances every point of the lattice by one frame.
///
/// The pointer value is sampled once by the caller and shared across all
/// points, so an input event arriving mid-frame can never split the
/// lattice between two pointer positions.
pub fn step_lattice(lattice: &mut Lattice, pointer: Vec2, cfg: &Config) {
    for point in &mut lattice.points {
        step_point(point, pointer, cfg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::PointerState;

    /// Speed picked up by a fresh point after one step with the pointer
    /// at distance `dist`.
    fn impulse_speed(dist: f32, cfg: &Config) -> f32 {
        let mut p = GridPoint::new(Vec2::ZERO);
        step_point(&mut p, Vec2::new(dist, 0.0), cfg);
        p.vel.length()
    }

    #[test]
    fn far_pointer_leaves_resting_point_fixed() {
        let cfg = Config::default();
        let mut p = GridPoint::new(Vec2::new(80.0, 120.0));

        for _ in 0..50 {
            step_point(&mut p, PointerState::OFF_SURFACE, &cfg);
        }

        assert_eq!(p.pos, p.origin);
        assert_eq!(p.vel, Vec2::ZERO);
    }

    #[test]
    fn displaced_point_converges_back_to_origin() {
        let cfg = Config::default();
        let mut p = GridPoint::new(Vec2::new(100.0, 100.0));
        p.pos += Vec2::new(10.0, 0.0);

        let mut distances = Vec::with_capacity(200);
        for _ in 0..200 {
            step_point(&mut p, PointerState::OFF_SURFACE, &cfg);
            distances.push(p.displacement().length());
        }

        // The spring is underdamped, so the distance oscillates through
        // zero; what must decay is the excursion envelope per window.
        let peak = |w: &[f32]| w.iter().cloned().fold(0.0f32, f32::max);
        let windows: Vec<f32> = distances.chunks(40).map(peak).collect();
        for pair in windows.windows(2) {
            assert!(
                pair[1] < pair[0],
                "excursion envelope grew: {} -> {}",
                pair[0],
                pair[1]
            );
        }

        assert!(
            *distances.last().unwrap() < 1e-3,
            "still {} px from rest after 200 frames",
            distances.last().unwrap()
        );
    }

    #[test]
    fn repulsion_strength_decreases_with_distance() {
        let cfg = Config::default();

        let mut last = f32::INFINITY;
        for dist in [0.0, 50.0, 100.0, 150.0, 199.0] {
            let speed = impulse_speed(dist, &cfg);
            assert!(
                speed < last,
                "impulse at {dist} px ({speed}) not below previous ({last})"
            );
            assert!(speed > 0.0);
            last = speed;
        }
    }

    #[test]
    fn repulsion_is_zero_at_and_beyond_the_radius() {
        let cfg = Config::default();
        assert_eq!(impulse_speed(cfg.mouse_radius, &cfg), 0.0);
        assert_eq!(impulse_speed(cfg.mouse_radius + 50.0, &cfg), 0.0);
    }

    #[test]
    fn pointer_contact_yields_finite_impulse() {
        let cfg = Config::default();
        let mut p = GridPoint::new(Vec2::ZERO);

        // Pointer exactly on the point: force caps at 1, no division by
        // the (zero) distance anywhere.
        step_point(&mut p, Vec2::ZERO, &cfg);

        assert!(p.vel.x.is_finite() && p.vel.y.is_finite());
        let expect = cfg.mouse_strength * REPEL_GAIN * (1.0 - cfg.damping);
        assert!((p.vel.length() - expect).abs() < 1e-6);
    }

    #[test]
    fn points_are_pushed_directly_away_from_the_pointer() {
        let cfg = Config::default();

        let mut p = GridPoint::new(Vec2::ZERO);
        let pointer = Vec2::new(30.0, 40.0);
        step_point(&mut p, pointer, &cfg);

        // Velocity opposes the direction toward the pointer.
        assert!(p.vel.dot(pointer) < 0.0);
        assert!(p.pos.x < 0.0 && p.pos.y < 0.0);
    }

    #[test]
    fn step_lattice_moves_only_points_inside_the_radius() {
        let mut cfg = Config::default();
        cfg.mouse_radius = 50.0;

        // 4x4 lattice with origins spanning -40..=80 on both axes.
        let mut lat = Lattice::build(80.0, 80.0, 40.0);
        let pointer = Vec2::ZERO;

        step_lattice(&mut lat, pointer, &cfg);

        let mut moved = 0;
        for p in &lat.points {
            if p.displacement() != Vec2::ZERO {
                moved += 1;
            } else {
                assert!(p.origin.distance(pointer) >= cfg.mouse_radius);
            }
        }
        // (0,0) itself plus its four axis-aligned neighbors at 40 px.
        assert_eq!(moved, 5);
    }
}
