//! Full-page home screen built with eframe/egui.
//!
//! This module defines [`HomePage`], which owns the liquid-grid
//! simulation plus the page chrome (greeting, clock, link hub, footer)
//! and implements [`eframe::App`] to redraw the whole surface every
//! frame.

use eframe::App;
use glam::Vec2;
use grid_core::{config::Config, sim::Simulation};
use rand::rng;

use crate::overlay::{self, Readouts};
use crate::theme::{Palette, Theme, additive};

/// Delay between picking a theme and re-reading its palette, so the
/// restyle lands after the widget styling has settled.
const RESTYLE_DELAY: f64 = 0.05;
/// Glow radius as a multiple of the repulsion radius.
const GLOW_SCALE: f32 = 1.5;
/// Triangle-fan resolution of the glow disc.
const GLOW_SEGMENTS: u32 = 48;

/// Link hub entries, drawn under the greeting in display order.
const LINKS: [(&str, &str); 4] = [
    ("[ GITHUB ]", "https://github.com"),
    ("[ HACKER NEWS ]", "https://news.ycombinator.com"),
    ("[ LOBSTERS ]", "https://lobste.rs"),
    ("[ RUST DOCS ]", "https://doc.rust-lang.org"),
];

/// Main application state for the home page.
///
/// [`HomePage`] glues together:
/// - The simulation core: [`Simulation`] with its [`Config`].
/// - Presentation state ([`Theme`], resolved [`Palette`]).
/// - The overlay chrome (greeting sequence, clock, links, telemetry).
/// - eframe/egui callbacks for drawing and input.
///
/// The typical per-frame update is:
/// 1. Resolve elapsed time and any pending theme restyle.
/// 2. Run the background pass: resize check, pointer tracking, clear,
///    glow, physics step, mesh edges.
/// 3. Lay the anchored overlays and the tuning window on top.
/// 4. Request the next repaint.
///
/// ### Fields
/// - `sim` - The point lattice, pointer state, and tuning constants.
/// - `theme` - Currently selected theme.
/// - `palette` - Render colors in use; lags `theme` by [`RESTYLE_DELAY`].
/// - `pending_restyle` - Deadline (egui time) of a scheduled palette
///   swap and lattice rebuild, if a theme switch is in flight.
///
/// - `rng` - Random number generator feeding the fake telemetry.
/// - `readouts` - Footer CPU/MEM figures.
///
/// - `started_at` - Time stamp of the first frame (egui time); the
///   greeting and link entrance animations count from here.
/// - `greeting_target` - Time-of-day greeting typed out after the
///   `HELLO WORLD` banner, fixed at startup.
pub struct HomePage {
    sim: Simulation,
    theme: Theme,
    palette: Palette,
    pending_restyle: Option<f64>,

    rng: rand::rngs::ThreadRng,
    readouts: Readouts,

    started_at: Option<f64>,
    greeting_target: String,
}

impl HomePage {
    /// Creates the page with default tuning and the default theme.
    ///
    /// The simulation starts on a zero-sized surface; the first
    /// background pass sees the real viewport and rebuilds the lattice
    /// to fit, so no layout knowledge is needed here.
    ///
    /// ### Returns
    /// A fully-initialized [`HomePage`] ready to be passed to
    /// `eframe::run_native`.
    pub fn new() -> Self {
        use chrono::Timelike;

        let mut rng = rng();
        let readouts = Readouts::new(&mut rng);
        let theme = Theme::Term;
        let hour = chrono::Local::now().hour();

        Self {
            sim: Simulation::new(0.0, 0.0, Config::default()),
            theme,
            palette: theme.palette(),
            pending_restyle: None,
            rng,
            readouts,
            started_at: None,
            greeting_target: overlay::greeting_for_hour(hour).to_owned(),
        }
    }

    /// Selects a theme and schedules the palette swap.
    ///
    /// Widget styling changes immediately at the call site; the render
    /// palette and the lattice rebuild follow [`RESTYLE_DELAY`] later.
    fn apply_theme(&mut self, theme: Theme, now: f64) {
        self.theme = theme;
        self.pending_restyle = Some(now + RESTYLE_DELAY);
    }

    /// Completes a scheduled theme switch once its deadline has passed:
    /// re-reads the palette and rebuilds the lattice at rest.
    fn poll_restyle(&mut self, now: f64) {
        if let Some(deadline) = self.pending_restyle
            && now >= deadline
        {
            self.palette = self.theme.palette();
            self.sim.rebuild();
            self.pending_restyle = None;
        }
    }

    /// One labeled `f32` [`egui::DragValue`] row of the tuning window.
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the full-bleed background: the cleared surface, the
    /// pointer glow, one physics step, and the deformed mesh edges, in
    /// that order.
    fn ui_background(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                // Rebuild the lattice whenever the surface changed size.
                let size = Vec2::new(rect.width(), rect.height());
                if self.sim.surface_size() != size {
                    self.sim.resize(size.x, size.y);
                }

                // Pointer tracking in surface coordinates. Frames
                // without a pointer position keep the last coordinates
                // (last-write-wins), so the deformation stays anchored
                // when the pointer leaves the window.
                if let Some(pos) = ctx.input(|i| i.pointer.latest_pos())
                    && rect.contains(pos)
                {
                    let local = Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y);
                    self.sim.track_pointer(local);
                }

                painter.rect_filled(rect, egui::CornerRadius::ZERO, self.theme.background());

                if self.sim.pointer_on_surface() {
                    let center = to_screen(rect, self.sim.pointer());
                    let radius = self.sim.config.mouse_radius * GLOW_SCALE;
                    painter.add(glow_mesh(center, radius, self.palette.glow));
                }

                self.sim.advance_frame();

                // Stroke every edge from the freshly stepped positions,
                // in one paint pass.
                let lattice = self.sim.lattice();
                let stroke = egui::Stroke::new(1.0, self.palette.grid_line);
                let mut segments = Vec::with_capacity(lattice.edge_count());
                for (a, b) in lattice.edges() {
                    segments.push(egui::Shape::line_segment(
                        [to_screen(rect, a), to_screen(rect, b)],
                        stroke,
                    ));
                }
                painter.extend(segments);
            });
    }

    /// Draws the boot greeting slightly above the surface center.
    fn ui_greeting(&self, ctx: &egui::Context, elapsed: f64) {
        egui::Area::new("greeting".into())
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, -40.0))
            .movable(false)
            .interactable(false)
            .show(ctx, |ui| {
                let text = overlay::greeting_text(elapsed, &self.greeting_target);
                ui.label(
                    egui::RichText::new(text)
                        .monospace()
                        .size(34.0)
                        .color(self.palette.accent),
                );
            });
    }

    /// Draws the clock in the top-right corner.
    fn ui_clock(&self, ctx: &egui::Context) {
        egui::Area::new("clock".into())
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 12.0))
            .movable(false)
            .interactable(false)
            .show(ctx, |ui| {
                let line = overlay::clock_line(chrono::Local::now().naive_local());
                ui.label(
                    egui::RichText::new(line)
                        .monospace()
                        .size(13.0)
                        .color(egui::Color32::from_gray(138)),
                );
            });
    }

    /// Draws the link hub under the greeting, fading each entry in on a
    /// staggered schedule.
    fn ui_links(&self, ctx: &egui::Context, elapsed: f64) {
        egui::Area::new("links".into())
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 40.0))
            .movable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 24.0;
                    for (i, (label, url)) in LINKS.iter().enumerate() {
                        let alpha = overlay::entrance_alpha(elapsed, i);
                        let text = egui::RichText::new(*label)
                            .monospace()
                            .size(15.0)
                            .color(self.palette.accent.gamma_multiply(alpha));
                        if ui.link(text).clicked() {
                            ctx.open_url(egui::OpenUrl::new_tab(url));
                        }
                    }
                });
            });
    }

    /// Builds the small floating theme picker.
    fn ui_theme_picker(&mut self, ctx: &egui::Context) {
        egui::Area::new("theme_picker".into())
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 12.0))
            .movable(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 32))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            for theme in Theme::ALL {
                                if ui
                                    .selectable_label(self.theme == theme, theme.label())
                                    .clicked()
                                {
                                    let now = ctx.input(|i| i.time);
                                    self.apply_theme(theme, now);
                                    ctx.set_visuals(theme.visuals());
                                }
                            }
                        });
                    });
            });
    }

    /// Draws the telemetry footer and resamples it on its own cadence.
    fn ui_footer(&mut self, ctx: &egui::Context, now: f64) {
        self.readouts.tick(now, &mut self.rng);

        egui::Area::new("footer".into())
            .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(16.0, -12.0))
            .movable(false)
            .interactable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 18.0;
                    let dim = self.palette.accent.gamma_multiply(0.7);
                    for label in [self.readouts.cpu_label(), self.readouts.mem_label()] {
                        ui.label(egui::RichText::new(label).monospace().size(12.0).color(dim));
                    }
                });
            });
    }

    /// Builds the collapsed-by-default tuning window for the simulation
    /// parameters.
    fn ui_tuning(&mut self, ctx: &egui::Context) {
        egui::Window::new("Tuning")
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .default_open(false)
            .resizable(false)
            .show(ctx, |ui| {
                let spacing_before = self.sim.config.spacing;

                Self::labeled_drag_f32(
                    ui,
                    "spacing:",
                    &mut self.sim.config.spacing,
                    8.0..=120.0,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "radius:",
                    &mut self.sim.config.mouse_radius,
                    20.0..=500.0,
                    2.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "strength:",
                    &mut self.sim.config.mouse_strength,
                    0.0..=2.0,
                    0.01,
                );
                Self::labeled_drag_f32(
                    ui,
                    "viscosity:",
                    &mut self.sim.config.viscosity,
                    0.0..=0.5,
                    0.005,
                );
                Self::labeled_drag_f32(
                    ui,
                    "damping:",
                    &mut self.sim.config.damping,
                    0.0..=1.0,
                    0.005,
                );

                // Spacing changes the lattice shape; everything else
                // applies live.
                if self.sim.config.spacing != spacing_before {
                    self.sim.rebuild();
                }

                ui.separator();
                if ui.button("Reset tuning").clicked() {
                    self.sim.config = Config::default();
                    self.sim.rebuild();
                }
            });
    }
}

impl App for HomePage {
    /// eframe callback that builds the whole page for each frame.
    ///
    /// Layering is back to front: the background pass first, then the
    /// anchored chrome, then the tuning window. Ends with an
    /// unconditional repaint request so the grid keeps settling even
    /// without input.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        let elapsed = now - *self.started_at.get_or_insert(now);

        self.poll_restyle(now);

        self.ui_background(ctx);
        self.ui_greeting(ctx, elapsed);
        self.ui_clock(ctx);
        self.ui_links(ctx, elapsed);
        self.ui_footer(ctx, now);
        self.ui_theme_picker(ctx);
        self.ui_tuning(ctx);

        ctx.request_repaint();
    }
}

/// Converts a simulation-space position to screen-space.
///
/// The simulation works in surface pixels with the origin at the
/// top-left of the drawing rect, so the mapping is a pure translation.
fn to_screen(rect: egui::Rect, p: Vec2) -> egui::Pos2 {
    egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
}

/// Builds the pointer glow as a triangle fan approximating a radial
/// gradient: the glow color at the center fading to fully transparent at
/// the rim, encoded for additive blending so it brightens the surface
/// underneath.
fn glow_mesh(center: egui::Pos2, radius: f32, color: egui::Color32) -> egui::Mesh {
    use std::f32::consts::TAU;

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(center, additive(color));
    for i in 0..=GLOW_SEGMENTS {
        let t = i as f32 / GLOW_SEGMENTS as f32 * TAU;
        mesh.colored_vertex(
            egui::pos2(center.x + t.cos() * radius, center.y + t.sin() * radius),
            egui::Color32::TRANSPARENT,
        );
    }
    for i in 0..GLOW_SEGMENTS {
        mesh.add_triangle(0, i + 1, i + 2);
    }
    mesh
}
