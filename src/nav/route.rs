//! Navigable destinations.

use std::fmt;

use crate::assets::Icon;

/// A named screen destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Welcome,
    Login,
    Home,
    Favorites,
    Profile,
    Cart,
}

impl Route {
    /// Unique string key of the destination.
    pub fn key(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Login => "login",
            Self::Home => "home",
            Self::Favorites => "favorites",
            Self::Profile => "profile",
            Self::Cart => "cart",
        }
    }

    /// Display label, as shown in the bottom navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Login => "Log in",
            Self::Home => "Home",
            Self::Favorites => "Favorites",
            Self::Profile => "Profile",
            Self::Cart => "Cart",
        }
    }

    /// Only tab destinations carry an icon.
    pub fn icon(self) -> Option<Icon> {
        match self {
            Self::Welcome | Self::Login => None,
            Self::Home => Some(Icon::Home),
            Self::Favorites => Some(Icon::FavoriteBorder),
            Self::Profile => Some(Icon::AccountCircle),
            Self::Cart => Some(Icon::ShoppingCart),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
