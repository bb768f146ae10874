//! Static content: the browsable theme cards and the bottom-bar destinations.

use crate::assets::ImageAsset;
use crate::nav::Route;

/// A theme card shown in the "Browse themes" strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeCard {
    DesertChic,
    TinyTerrariums,
    JungleVibes,
    EasyCare,
    Statements,
}

impl ThemeCard {
    /// Catalog order, as rendered left to right.
    pub const ALL: [ThemeCard; 5] = [
        ThemeCard::DesertChic,
        ThemeCard::TinyTerrariums,
        ThemeCard::JungleVibes,
        ThemeCard::EasyCare,
        ThemeCard::Statements,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::DesertChic => "Desert chic",
            Self::TinyTerrariums => "Tiny terrariums",
            Self::JungleVibes => "Jungle vibes",
            Self::EasyCare => "Easy care",
            Self::Statements => "Statements",
        }
    }

    pub fn image(self) -> ImageAsset {
        match self {
            Self::DesertChic => ImageAsset::DesertChic,
            Self::TinyTerrariums => ImageAsset::TinyTerrariums,
            Self::JungleVibes => ImageAsset::JungleVibes,
            Self::EasyCare => ImageAsset::EasyCare,
            Self::Statements => ImageAsset::Statements,
        }
    }
}

/// Destinations of the Home screen's bottom navigation bar, in bar order.
pub const NAV_ITEMS: [Route; 4] = [Route::Home, Route::Favorites, Route::Profile, Route::Cart];
