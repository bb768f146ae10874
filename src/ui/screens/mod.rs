//! Routed screens.

pub mod home;
pub mod login;
pub mod welcome;

pub use home::HomeScreen;
pub use login::LoginScreen;
pub use welcome::WelcomeScreen;
