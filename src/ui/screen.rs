//! The `Screen` trait and the shared `ScreenState` view passed to each screen.
//!
//! To add a new screen:
//! 1. Create a new file in `ui/screens/`.
//! 2. Implement `Screen` for your struct.
//! 3. Register a factory with `NavHost::builder(..).composable(route, ..)`.

use eframe::egui;

use crate::nav::{NavController, Route};
use crate::ui::theme::AppTheme;

/// What a screen may read and mutate while it is drawn.
///
/// `nav` is the controller of the graph the screen is registered in, so a
/// screen can only navigate among its siblings.
pub struct ScreenState<'a> {
    pub theme: &'a AppTheme,
    pub nav: &'a mut NavController,
}

/// Trait implemented by every routed screen.
///
/// A screen instance lives exactly as long as its back-stack entry is on top:
/// the host creates it on arrival and drops it on departure, taking any
/// field state with it.
pub trait Screen {
    /// Route this screen is registered under.
    fn route(&self) -> Route;

    /// Draw the screen. Screens own their panels, so this receives the
    /// context rather than a `Ui`.
    fn show(&mut self, ctx: &egui::Context, state: &mut ScreenState<'_>);

    /// Controller of a nested graph hosted by this screen, if any.
    fn nested_mut(&mut self) -> Option<&mut NavController> {
        None
    }

    /// Offer a back press to the screen before the host pops its own stack.
    fn on_back(&mut self) -> bool {
        self.nested_mut().is_some_and(|nav| nav.pop_back())
    }
}
