//! Launch configuration.
//!
//! Usage: `bloom [system|light|dark]`. Without an argument the palette
//! follows the OS theme.

use std::str::FromStr;

use eframe::egui::{self, Vec2, vec2};

use crate::error::{AppError, Result};

/// Which palette to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    /// Follow the OS; light when the OS does not report a theme.
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    /// Dark flag for the current frame given the OS theme, if known.
    pub fn resolve(self, system: Option<egui::Theme>) -> bool {
        match self {
            Self::System => system == Some(egui::Theme::Dark),
            Self::Light => false,
            Self::Dark => true,
        }
    }
}

impl FromStr for ThemePreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(AppError::UnknownTheme(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: String,
    /// Initial window size; matches the phone preview.
    pub window_size: Vec2,
    pub theme: ThemePreference,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Bloom".to_owned(),
            window_size: vec2(360.0, 640.0),
            theme: ThemePreference::default(),
        }
    }
}

impl Config {
    /// Build from command-line arguments (program name already skipped).
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(theme) = args.next() {
            config.theme = theme.parse()?;
        }
        Ok(config)
    }

    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(&self.title)
                .with_inner_size(self.window_size)
                .with_min_inner_size(vec2(320.0, 480.0)),
            ..Default::default()
        }
    }
}
