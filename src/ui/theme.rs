//! Theme provider: palette, typography scale and shape tokens.
//!
//! `AppTheme` is built once per frame from the dark-mode flag and handed to
//! every screen; `AppTheme::style` translates it into the egui style that the
//! stock widgets pick up.

use eframe::egui::{self, Color32, CornerRadius, FontId, Style, TextStyle, Visuals};

use crate::ui::colors::{DARK_PALETTE, LIGHT_PALETTE, Palette};

/// Font sizes of the typography scale, in points.
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub h1: FontId,
    pub h2: FontId,
    pub subtitle1: FontId,
    pub body1: FontId,
    pub body2: FontId,
    pub button: FontId,
    pub caption: FontId,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            h1: FontId::proportional(18.0),
            h2: FontId::proportional(14.0),
            subtitle1: FontId::proportional(16.0),
            body1: FontId::proportional(14.0),
            body2: FontId::proportional(12.0),
            button: FontId::proportional(14.0),
            caption: FontId::proportional(12.0),
        }
    }
}

/// Corner radii.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shapes {
    pub small: CornerRadius,
    pub medium: CornerRadius,
}

impl Default for Shapes {
    fn default() -> Self {
        Self {
            small: CornerRadius::same(4),
            medium: CornerRadius::same(24),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub dark: bool,
    pub palette: Palette,
    pub typography: Typography,
    pub shapes: Shapes,
}

impl AppTheme {
    pub fn new(dark: bool) -> Self {
        Self {
            dark,
            palette: if dark { *DARK_PALETTE } else { *LIGHT_PALETTE },
            typography: Typography::default(),
            shapes: Shapes::default(),
        }
    }

    pub fn egui_theme(&self) -> egui::Theme {
        if self.dark {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        }
    }

    pub fn visuals(&self) -> Visuals {
        let p = &self.palette;
        let mut visuals = if self.dark {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.override_text_color = Some(p.on_background);
        visuals.panel_fill = p.background;
        visuals.window_fill = p.surface;
        visuals.extreme_bg_color = p.background;
        visuals.faint_bg_color = p.surface;
        visuals.hyperlink_color = p.secondary;
        visuals.selection.bg_fill = p.secondary.gamma_multiply(0.35);
        visuals.selection.stroke.color = p.on_background;
        visuals.text_cursor.stroke.color = p.on_background;

        for widget in [
            &mut visuals.widgets.noninteractive,
            &mut visuals.widgets.inactive,
            &mut visuals.widgets.hovered,
            &mut visuals.widgets.active,
            &mut visuals.widgets.open,
        ] {
            widget.fg_stroke.color = p.on_background;
            widget.bg_stroke.color = p.on_background;
            widget.bg_fill = Color32::TRANSPARENT;
            widget.weak_bg_fill = Color32::TRANSPARENT;
        }
        visuals.widgets.noninteractive.bg_fill = p.background;
        visuals
    }

    pub fn style(&self) -> Style {
        let t = &self.typography;
        let mut style = Style {
            visuals: self.visuals(),
            ..Style::default()
        };
        style.text_styles = [
            (TextStyle::Heading, t.h1.clone()),
            (TextStyle::Body, t.body1.clone()),
            (TextStyle::Button, t.button.clone()),
            (TextStyle::Small, t.caption.clone()),
            (TextStyle::Monospace, FontId::monospace(t.body1.size)),
        ]
        .into();
        style
    }

    /// Install this theme on `ctx` for the next pass.
    pub fn apply(&self, ctx: &egui::Context) {
        let theme = self.egui_theme();
        ctx.set_style_of(theme, self.style());
        ctx.set_theme(theme);
    }
}
