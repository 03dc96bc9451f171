//! Core 2-D liquid-grid simulation library.
//!
//! Main components:
//! - [`lattice`] — the overscanned point grid and its mesh edges.
//! - [`point`] — per-point state: rest position, position, velocity.
//! - [`physics`] — the per-frame force/integration step.
//! - [`pointer`] — shared pointer state with an off-surface default.
//! - [`sim`] — the simulation context that owns and advances everything.
//! - [`config`] — tuning constants for the liquid feel.
//! - [`types`] — shared type aliases.

pub mod config;
pub mod lattice;
pub mod physics;
pub mod point;
pub mod pointer;
pub mod sim;
pub mod types;
