//! Welcome screen: background art, illustration, logo and the two entry actions.

use eframe::egui::{
    self, Align, Button, CornerRadius, Frame, Image, Layout, Rect, RichText, UiBuilder, Vec2,
    pos2, vec2,
};

use crate::assets::ImageAsset;
use crate::nav::{NavController, NavOptions, NavOutcome, Route};
use crate::ui::controls::ThemedButton;
use crate::ui::controls::image::{natural_size, paint_cropped};
use crate::ui::controls::text::{baseline_label, galley};
use crate::ui::screen::{Screen, ScreenState};

pub const TAGLINE: &str = "Beautiful home garden solutions";

#[derive(Default)]
pub struct WelcomeScreen;

impl WelcomeScreen {
    const ILLUSTRATION_OFFSET: Vec2 = vec2(88.0, 72.0);
    const CONTENT_GAP: f32 = 48.0;
    const CONTENT_PADDING: f32 = 16.0;
    const TEXT_BUTTON_HEIGHT: f32 = 48.0;
    const TEXT_BUTTON_TOP: f32 = 8.0;

    /// Sign-up has no flow yet; the button is present but inert.
    pub fn on_create_account() {
        log::debug!("create account tapped: sign-up is not wired");
    }

    pub fn on_log_in(nav: &mut NavController) -> NavOutcome {
        nav.navigate(Route::Login, NavOptions::default())
    }
}

impl Screen for WelcomeScreen {
    fn route(&self) -> Route {
        Route::Welcome
    }

    fn show(&mut self, ctx: &egui::Context, state: &mut ScreenState<'_>) {
        let theme = state.theme;
        let p = &theme.palette;
        let mut log_in = false;

        egui::CentralPanel::default()
            .frame(Frame::new().fill(p.primary))
            .show(ctx, |ui| {
                let full = ui.max_rect();
                paint_cropped(
                    ui,
                    ImageAsset::WelcomeBackground.source(theme.dark),
                    full,
                    CornerRadius::ZERO,
                );

                let illos = ImageAsset::WelcomeIllustration;
                let illos_size =
                    natural_size(ui.ctx(), illos.source(theme.dark), illos.fallback_size());
                let illos_rect =
                    Rect::from_min_size(full.min + Self::ILLUSTRATION_OFFSET, illos_size);
                Image::new(illos.source(theme.dark)).paint_at(ui, illos_rect);

                let content = Rect::from_min_max(
                    pos2(full.left(), illos_rect.bottom() + Self::CONTENT_GAP),
                    full.max,
                )
                .shrink(Self::CONTENT_PADDING);
                let builder = UiBuilder::new()
                    .max_rect(content)
                    .layout(Layout::top_down(Align::Center));
                ui.scope_builder(builder, |ui| {
                    let logo = ImageAsset::Logo;
                    let logo_size =
                        natural_size(ui.ctx(), logo.source(theme.dark), logo.fallback_size());
                    ui.add(Image::new(logo.source(theme.dark)).fit_to_exact_size(logo_size));

                    let tagline = galley(ui, TAGLINE, theme.typography.subtitle1.clone(), p.on_primary);
                    baseline_label(ui, tagline, 24.0, 40.0, p.on_primary);

                    if ui.add(ThemedButton::new("Create account", theme)).clicked() {
                        Self::on_create_account();
                    }

                    ui.add_space(Self::TEXT_BUTTON_TOP);
                    let text_button = Button::new(
                        RichText::new("Log in")
                            .font(theme.typography.button.clone())
                            .color(p.on_primary),
                    )
                    .frame(false)
                    .min_size(vec2(0.0, Self::TEXT_BUTTON_HEIGHT - Self::TEXT_BUTTON_TOP));
                    if ui.add(text_button).clicked() {
                        log_in = true;
                    }
                });
            });

        if log_in {
            Self::on_log_in(state.nav);
        }
    }
}
