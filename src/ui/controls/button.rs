//! Primary call-to-action button.

use eframe::egui::{Button, Response, RichText, Stroke, Ui, Widget, vec2};

use crate::ui::theme::AppTheme;

/// Full-width button filled with the secondary color.
pub struct ThemedButton<'a> {
    text: &'a str,
    theme: &'a AppTheme,
}

impl<'a> ThemedButton<'a> {
    pub const HEIGHT: f32 = 48.0;

    pub fn new(text: &'a str, theme: &'a AppTheme) -> Self {
        Self { text, theme }
    }
}

impl Widget for ThemedButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let p = &self.theme.palette;
        let label = RichText::new(self.text)
            .font(self.theme.typography.button.clone())
            .color(p.on_secondary);
        Button::new(label)
            .fill(p.secondary)
            .stroke(Stroke::NONE)
            .corner_radius(self.theme.shapes.medium)
            .min_size(vec2(ui.available_width(), Self::HEIGHT))
            .ui(ui)
    }
}
