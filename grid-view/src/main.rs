//! Binary entry point: window setup for the liquid grid home page.
//!
//! Everything interactive lives in [`HomePage`]; this file only picks
//! the window options, installs the default theme styling, and hands
//! control to eframe.

mod app;
mod overlay;
mod theme;

use app::HomePage;

/// Opens the `"Liquid Grid"` window and runs it to completion.
///
/// Default [`eframe::NativeOptions`] are enough here; the page draws
/// its own chrome, so no decorations or size hints are customized. The
/// default theme's widget styling is installed before the first frame.
///
/// ### Returns
/// - `Ok(())` once the window is closed.
/// - `Err` when the native window or event loop cannot be created.
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Liquid Grid",
        options,
        Box::new(|cc| {
            // Widget styling follows the default theme from the start.
            cc.egui_ctx.set_visuals(theme::Theme::Term.visuals());
            Ok(Box::new(HomePage::new()))
        }),
    )
}
