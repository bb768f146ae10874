//! Bundled image and icon assets.
//!
//! Every asset is an SVG compiled into the binary with `include_image!` and
//! decoded by the `egui_extras` loaders installed in [`crate::ui::app::App::new`].
//! The rest of the crate only ever handles the [`ImageAsset`] / [`Icon`]
//! identifiers.

use eframe::egui::{self, ImageSource, Vec2, vec2};

// ── Images ─────────────────────────────────────────────────────────────────────

/// Named raster-style images. Some have a dedicated dark-theme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageAsset {
    WelcomeBackground,
    WelcomeIllustration,
    Logo,
    DesertChic,
    TinyTerrariums,
    JungleVibes,
    EasyCare,
    Statements,
}

impl ImageAsset {
    /// Resolve the asset for the given theme flag.
    pub fn source(self, dark: bool) -> ImageSource<'static> {
        match (self, dark) {
            (Self::WelcomeBackground, false) => {
                egui::include_image!("../assets/images/welcome_bg_light.svg")
            }
            (Self::WelcomeBackground, true) => {
                egui::include_image!("../assets/images/welcome_bg_dark.svg")
            }
            (Self::WelcomeIllustration, false) => {
                egui::include_image!("../assets/images/welcome_illos_light.svg")
            }
            (Self::WelcomeIllustration, true) => {
                egui::include_image!("../assets/images/welcome_illos_dark.svg")
            }
            (Self::Logo, false) => egui::include_image!("../assets/images/logo_light.svg"),
            (Self::Logo, true) => egui::include_image!("../assets/images/logo_dark.svg"),
            (Self::DesertChic, _) => egui::include_image!("../assets/images/desert_chic.svg"),
            (Self::TinyTerrariums, _) => {
                egui::include_image!("../assets/images/tiny_terrariums.svg")
            }
            (Self::JungleVibes, _) => egui::include_image!("../assets/images/jungle_vibes.svg"),
            (Self::EasyCare, _) => egui::include_image!("../assets/images/easy_care.svg"),
            (Self::Statements, _) => egui::include_image!("../assets/images/statements.svg"),
        }
    }

    /// Natural size of the artwork, used for layout while the texture is
    /// still loading (or when no loader could decode it).
    pub fn fallback_size(self) -> Vec2 {
        match self {
            Self::WelcomeBackground => vec2(360.0, 640.0),
            Self::WelcomeIllustration => vec2(310.0, 280.0),
            Self::Logo => vec2(132.0, 32.0),
            Self::DesertChic
            | Self::TinyTerrariums
            | Self::JungleVibes
            | Self::EasyCare
            | Self::Statements => vec2(200.0, 200.0),
        }
    }
}

// ── Icons ──────────────────────────────────────────────────────────────────────

/// Single-color vector icons. Drawn white in the SVG and tinted at paint time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    FavoriteBorder,
    AccountCircle,
    ShoppingCart,
    Search,
}

impl Icon {
    pub fn source(self) -> ImageSource<'static> {
        match self {
            Self::Home => egui::include_image!("../assets/icons/home.svg"),
            Self::FavoriteBorder => egui::include_image!("../assets/icons/favorite_border.svg"),
            Self::AccountCircle => egui::include_image!("../assets/icons/account_circle.svg"),
            Self::ShoppingCart => egui::include_image!("../assets/icons/shopping_cart.svg"),
            Self::Search => egui::include_image!("../assets/icons/search.svg"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(source: ImageSource<'static>) -> String {
        match source {
            ImageSource::Bytes { uri, .. } => uri.into_owned(),
            ImageSource::Uri(uri) => uri.into_owned(),
            ImageSource::Texture(_) => String::new(),
        }
    }

    #[test]
    fn themed_assets_have_distinct_dark_variants() {
        for asset in [
            ImageAsset::WelcomeBackground,
            ImageAsset::WelcomeIllustration,
            ImageAsset::Logo,
        ] {
            assert_ne!(uri(asset.source(false)), uri(asset.source(true)), "{asset:?}");
        }
    }

    #[test]
    fn card_images_ignore_the_theme_flag() {
        assert_eq!(
            uri(ImageAsset::JungleVibes.source(false)),
            uri(ImageAsset::JungleVibes.source(true))
        );
    }

    #[test]
    fn every_asset_is_an_svg() {
        assert!(uri(Icon::Search.source()).ends_with(".svg"));
        assert!(uri(ImageAsset::Statements.source(true)).ends_with(".svg"));
    }
}
