//! Static light and dark color palettes.

use eframe::egui::Color32;
use once_cell::sync::Lazy;

/// Material-style color roles. Every `on_*` role is legible on its base role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color32,
    pub secondary: Color32,
    pub background: Color32,
    pub surface: Color32,
    pub on_primary: Color32,
    pub on_secondary: Color32,
    pub on_background: Color32,
    pub on_surface: Color32,
}

impl Palette {
    /// All roles in a fixed order, for whole-palette comparisons.
    #[cfg(test)]
    pub fn roles(&self) -> [Color32; 8] {
        [
            self.primary,
            self.secondary,
            self.background,
            self.surface,
            self.on_primary,
            self.on_secondary,
            self.on_background,
            self.on_surface,
        ]
    }
}

const PINK_100: Color32 = Color32::from_rgb(0xFF, 0xF1, 0xF1);
const PINK_900: Color32 = Color32::from_rgb(0x3F, 0x2C, 0x2C);
const GREEN_900: Color32 = Color32::from_rgb(0x2D, 0x3B, 0x2D);
const GREEN_300: Color32 = Color32::from_rgb(0xB8, 0xC9, 0xB8);
const GRAY: Color32 = Color32::from_rgb(0x23, 0x23, 0x23);

pub static LIGHT_PALETTE: Lazy<Palette> = Lazy::new(|| Palette {
    primary: PINK_100,
    secondary: PINK_900,
    background: Color32::WHITE,
    surface: Color32::from_rgba_unmultiplied(255, 255, 255, 217), // white 85%
    on_primary: GRAY,
    on_secondary: Color32::WHITE,
    on_background: GRAY,
    on_surface: GRAY,
});

pub static DARK_PALETTE: Lazy<Palette> = Lazy::new(|| Palette {
    primary: GREEN_900,
    secondary: GREEN_300,
    background: GRAY,
    surface: Color32::from_rgba_unmultiplied(255, 255, 255, 38), // white 15%
    on_primary: Color32::WHITE,
    on_secondary: GRAY,
    on_background: Color32::WHITE,
    on_surface: Color32::WHITE,
});
