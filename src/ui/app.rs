//! Application orchestrator: owns the theme and the root navigation host.

use eframe::egui::{self, Key, PointerButton};

use crate::config::Config;
use crate::nav::Route;
use crate::ui::nav_host::NavHost;
use crate::ui::screens::{HomeScreen, LoginScreen, WelcomeScreen};
use crate::ui::theme::AppTheme;

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// `App` only:
/// 1. Resolves the dark flag and installs the matching theme.
/// 2. Routes back presses to the navigation host.
/// 3. Draws whatever screen the host says is current.
pub struct App {
    config: Config,
    theme: AppTheme,
    /// Dark flag of the theme last installed on the context.
    theme_applied: Option<bool>,
    host: NavHost,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self::with_config(config)
    }

    /// App without a window, for headless rendering.
    pub fn with_config(config: Config) -> Self {
        // Adding a screen = one `composable` line here.
        let host = NavHost::builder(Route::Welcome)
            .composable(Route::Welcome, || Box::new(WelcomeScreen))
            .composable(Route::Login, || Box::new(LoginScreen::default()))
            .composable(Route::Home, || Box::new(HomeScreen::default()))
            .build();

        Self {
            config,
            theme: AppTheme::new(false),
            theme_applied: None,
            host,
        }
    }

    fn sync_theme(&mut self, ctx: &egui::Context) {
        let dark = self.config.theme.resolve(ctx.system_theme());
        if self.theme_applied == Some(dark) {
            return;
        }
        if self.theme_applied.is_some() {
            log::info!("switching to the {} palette", if dark { "dark" } else { "light" });
        }
        self.theme = AppTheme::new(dark);
        self.theme.apply(ctx);
        self.theme_applied = Some(dark);
    }

    fn back_requested(ctx: &egui::Context) -> bool {
        let typing = ctx.wants_keyboard_input();
        ctx.input(|i| {
            (!typing && i.key_pressed(Key::Escape)) || i.pointer.button_pressed(PointerButton::Extra1)
        })
    }

    /// One frame: theme, back handling, then the current screen.
    pub fn render(&mut self, ctx: &egui::Context) {
        self.sync_theme(ctx);

        if Self::back_requested(ctx) {
            if self.host.back() {
                ctx.request_repaint();
            } else {
                log::debug!("back at {}: nothing to pop", self.host.active_screen().route());
            }
        }

        self.host.show(ctx, &self.theme);
    }
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ThemeCard;
    use crate::config::ThemePreference;
    use crate::nav::{NavOptions, NavOutcome};
    use crate::ui::colors::{DARK_PALETTE, LIGHT_PALETTE};
    use crate::ui::screens::{home, login, welcome};
    use crate::ui::test_support::{
        click, painted_fills, painted_text, painted_texts, raw_input, render, render_with_input,
    };
    use eframe::egui::{FullOutput, Pos2, RawInput};

    fn frame(app: &mut App, ctx: &egui::Context) -> Vec<String> {
        painted_texts(&render(ctx, |ctx| app.render(ctx)))
    }

    fn escape() -> egui::Event {
        egui::Event::Key {
            key: Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn selected_tab(app: &mut App) -> Option<Route> {
        app.host.active_screen_mut().nested_mut().map(|tabs| tabs.current())
    }

    fn tab_generation(app: &mut App) -> Option<u64> {
        app.host.active_screen_mut().nested_mut().map(|tabs| tabs.generation())
    }

    fn center_of(output: &FullOutput, text: &str) -> Pos2 {
        match painted_text(output, text) {
            Some((rect, _)) => rect.center(),
            None => panic!("`{text}` not painted: {:?}", painted_texts(output)),
        }
    }

    #[test]
    fn launches_into_welcome() {
        let mut app = App::with_config(Config::default());
        let ctx = egui::Context::default();
        let texts = frame(&mut app, &ctx);
        assert_eq!(app.host.controller().current(), Route::Welcome);
        assert!(texts.iter().any(|t| t == welcome::TAGLINE), "{texts:?}");
    }

    #[test]
    fn welcome_login_home_cart_scenario() {
        let mut app = App::with_config(Config::default());
        let ctx = egui::Context::default();
        frame(&mut app, &ctx);

        WelcomeScreen::on_log_in(app.host.controller_mut());
        let texts = frame(&mut app, &ctx);
        assert_eq!(app.host.active_screen().route(), Route::Login);
        assert!(texts.iter().any(|t| t == login::HEADING), "{texts:?}");

        LoginScreen::on_log_in(app.host.controller_mut());
        let texts = frame(&mut app, &ctx);
        assert_eq!(app.host.active_screen().route(), Route::Home);
        assert_eq!(selected_tab(&mut app), Some(Route::Home));
        assert!(texts.iter().any(|t| t == home::BROWSE_HEADING), "{texts:?}");

        let Some(tabs) = app.host.active_screen_mut().nested_mut() else {
            panic!("home hosts the tab graph");
        };
        let options = NavOptions::tab(tabs.graph());
        assert_eq!(
            tabs.navigate(Route::Cart, options),
            NavOutcome::Navigated {
                from: Route::Home,
                to: Route::Cart
            }
        );
        let generation = tabs.generation();
        assert_eq!(tabs.navigate(Route::Cart, options), NavOutcome::AlreadyCurrent(Route::Cart));
        assert_eq!(tabs.generation(), generation);

        let texts = frame(&mut app, &ctx);
        assert_eq!(selected_tab(&mut app), Some(Route::Cart));
        assert!(texts.iter().any(|t| t == home::BROWSE_HEADING), "{texts:?}");
        assert!(texts.iter().any(|t| t == ThemeCard::DesertChic.label()), "{texts:?}");
        assert_eq!(app.host.controller().back_stack(), [Route::Welcome, Route::Login, Route::Home]);
    }

    #[test]
    fn tapping_through_log_in_and_the_bar() {
        let mut app = App::with_config(Config::default());
        let ctx = egui::Context::default();

        let welcome = render(&ctx, |ctx| app.render(ctx));
        click(&ctx, center_of(&welcome, "Log in"), |ctx| app.render(ctx));
        assert_eq!(app.host.controller().current(), Route::Login);

        let login = render(&ctx, |ctx| app.render(ctx));
        click(&ctx, center_of(&login, "Log in"), |ctx| app.render(ctx));
        assert_eq!(app.host.controller().current(), Route::Home);
        assert_eq!(selected_tab(&mut app), Some(Route::Home));

        let home = render(&ctx, |ctx| app.render(ctx));
        let cart = center_of(&home, "Cart");
        click(&ctx, cart, |ctx| app.render(ctx));
        assert_eq!(selected_tab(&mut app), Some(Route::Cart));

        // The bar highlights Cart with the full content color and dims the rest.
        let on_primary = LIGHT_PALETTE.on_primary;
        let bar = render(&ctx, |ctx| app.render(ctx));
        assert_eq!(painted_text(&bar, "Cart").map(|(_, c)| c), Some(on_primary));
        for other in ["Home", "Favorites", "Profile"] {
            let color = painted_text(&bar, other).map(|(_, c)| c);
            assert_eq!(color, Some(on_primary.gamma_multiply(0.74)), "{other}");
        }
        assert!(painted_texts(&bar).iter().any(|t| t == home::BROWSE_HEADING));

        // Tapping the selected tab again is not a navigation event.
        let generation = tab_generation(&mut app);
        click(&ctx, cart, |ctx| app.render(ctx));
        assert_eq!(tab_generation(&mut app), generation);
        assert_eq!(selected_tab(&mut app), Some(Route::Cart));
        assert_eq!(app.host.controller().back_stack(), [Route::Welcome, Route::Login, Route::Home]);
    }

    #[test]
    fn os_theme_change_recolors_the_next_frame() {
        let mut app = App::with_config(Config::default());
        let ctx = egui::Context::default();
        let frame_under = |app: &mut App, system: egui::Theme| {
            let input = RawInput {
                system_theme: Some(system),
                ..raw_input(Vec::new())
            };
            painted_fills(&ctx.run(input, |ctx| app.render(ctx)))
        };

        let light = frame_under(&mut app, egui::Theme::Light);
        assert!(!app.theme.dark);
        let dark = frame_under(&mut app, egui::Theme::Dark);
        assert!(app.theme.dark);

        for (fills, own, other) in [
            (&light, &*LIGHT_PALETTE, &*DARK_PALETTE),
            (&dark, &*DARK_PALETTE, &*LIGHT_PALETTE),
        ] {
            // Welcome background and the "Create account" button.
            for color in [own.primary, own.secondary] {
                assert!(fills.contains(&color), "{color:?} missing from {fills:?}");
            }
            for color in [other.primary, other.secondary] {
                assert!(!fills.contains(&color), "{color:?} left over in {fills:?}");
            }
        }
    }

    #[test]
    fn escape_goes_back_through_tabs_then_screens() {
        let mut app = App::with_config(Config::default());
        let ctx = egui::Context::default();
        WelcomeScreen::on_log_in(app.host.controller_mut());
        LoginScreen::on_log_in(app.host.controller_mut());
        if let Some(tabs) = app.host.active_screen_mut().nested_mut() {
            let options = NavOptions::tab(tabs.graph());
            tabs.navigate(Route::Profile, options);
        }

        render_with_input(&ctx, vec![escape()], |ctx| app.render(ctx));
        assert_eq!(app.host.controller().current(), Route::Home);
        assert_eq!(selected_tab(&mut app), Some(Route::Home));

        render_with_input(&ctx, vec![escape()], |ctx| app.render(ctx));
        assert_eq!(app.host.controller().current(), Route::Login);

        render_with_input(&ctx, vec![escape()], |ctx| app.render(ctx));
        render_with_input(&ctx, vec![escape()], |ctx| app.render(ctx));
        assert_eq!(app.host.controller().back_stack(), [Route::Welcome]);
    }

    #[test]
    fn theme_preference_picks_the_palette() {
        for (preference, dark) in [(ThemePreference::System, false), (ThemePreference::Dark, true)] {
            let mut app = App::with_config(Config {
                theme: preference,
                ..Config::default()
            });
            let ctx = egui::Context::default();
            frame(&mut app, &ctx);
            assert_eq!(app.theme, AppTheme::new(dark));
            assert_eq!(ctx.style().visuals.panel_fill, app.theme.palette.background);
        }
    }

    #[test]
    fn every_screen_renders_in_both_themes() {
        for preference in [ThemePreference::Light, ThemePreference::Dark] {
            let mut app = App::with_config(Config {
                theme: preference,
                ..Config::default()
            });
            let ctx = egui::Context::default();
            for route in [Route::Login, Route::Home] {
                let before = frame(&mut app, &ctx);
                assert!(!before.is_empty());
                app.host.controller_mut().navigate(route, NavOptions::default());
            }
            assert!(!frame(&mut app, &ctx).is_empty());
        }
    }
}
