//! Presentation themes and the render palette resolved from them.

use egui::Color32;

/// The colors the background pass reads every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Stroke color for the mesh edges.
    pub grid_line: Color32,
    /// Highlight color for the page chrome (greeting, links, footer).
    pub accent: Color32,
    /// Center color of the pointer glow; its alpha sets the intensity.
    pub glow: Color32,
}

impl Palette {
    /// The documented defaults, applied whenever a theme provides no
    /// override: faint white grid lines, terminal-green accent, and a
    /// soft green glow.
    pub fn fallback() -> Self {
        Self {
            grid_line: Color32::from_rgba_unmultiplied(255, 255, 255, 13),
            accent: Color32::from_rgb(0x00, 0xff, 0x41),
            glow: Color32::from_rgba_unmultiplied(0, 255, 65, 38),
        }
    }
}

/// Built-in color themes, all dark terminal variants.
///
/// [`Theme::Term`] is the default and resolves to exactly
/// [`Palette::fallback`]; the others override accent, glow, and grid
/// tint. Switching themes restyles widgets immediately; the viewer
/// re-reads the palette and rebuilds the lattice shortly after a switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Term,
    Amber,
    Ice,
    Violet,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Term, Theme::Amber, Theme::Ice, Theme::Violet];

    pub fn label(self) -> &'static str {
        match self {
            Theme::Term => "term",
            Theme::Amber => "amber",
            Theme::Ice => "ice",
            Theme::Violet => "violet",
        }
    }

    /// Resolves the three render colors for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Term => Palette::fallback(),
            Theme::Amber => Palette {
                grid_line: Color32::from_rgba_unmultiplied(255, 196, 110, 15),
                accent: Color32::from_rgb(0xff, 0xb0, 0x00),
                glow: Color32::from_rgba_unmultiplied(255, 176, 0, 38),
            },
            Theme::Ice => Palette {
                grid_line: Color32::from_rgba_unmultiplied(160, 220, 255, 15),
                accent: Color32::from_rgb(0x00, 0xd5, 0xff),
                glow: Color32::from_rgba_unmultiplied(0, 213, 255, 36),
            },
            Theme::Violet => Palette {
                grid_line: Color32::from_rgba_unmultiplied(205, 160, 255, 15),
                accent: Color32::from_rgb(0xbd, 0x5d, 0xff),
                glow: Color32::from_rgba_unmultiplied(189, 93, 255, 38),
            },
        }
    }

    /// Surface clear color; the canvas is wiped with this every frame.
    pub fn background(self) -> Color32 {
        match self {
            Theme::Term => Color32::from_rgb(0x0a, 0x0a, 0x0a),
            Theme::Amber => Color32::from_rgb(0x10, 0x0a, 0x02),
            Theme::Ice => Color32::from_rgb(0x05, 0x0a, 0x0f),
            Theme::Violet => Color32::from_rgb(0x0a, 0x05, 0x12),
        }
    }

    /// egui widget styling matching this theme; applied immediately on
    /// switch, unlike the deferred palette re-read.
    pub fn visuals(self) -> egui::Visuals {
        let palette = self.palette();
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(Color32::from_gray(0xc8));
        visuals.hyperlink_color = palette.accent;
        visuals.selection.bg_fill = palette.accent.gamma_multiply(0.35);
        visuals.window_fill = self.background().gamma_multiply(0.92);
        visuals
    }
}

/// Re-encodes a straight-alpha color for additive composition.
///
/// `Color32` stores premultiplied components, so zeroing the alpha while
/// keeping the RGB yields egui's additive blend: the glow brightens
/// whatever is underneath instead of covering it, like a canvas
/// `lighter` composite.
pub fn additive(color: Color32) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), 0)
}
