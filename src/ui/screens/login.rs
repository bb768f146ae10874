//! Login screen: email and password fields, legal notice, submit.

use eframe::egui::{self, Align, Frame, Layout, Margin};

use crate::nav::{NavController, NavOptions, NavOutcome, Route};
use crate::ui::controls::text::{AnnotatedText, baseline_label, galley};
use crate::ui::controls::{KeyboardType, LabeledTextField, ThemedButton, VisualTransformation};
use crate::ui::screen::{Screen, ScreenState};

pub const HEADING: &str = "Log in with email";
pub const TERMS: &str =
    "By clicking below, you agree to our Terms of Use and consent to our Privacy Policy.";

/// Character spans of "Terms of Use" and "Privacy Policy" in [`TERMS`].
const TERMS_OF_USE: std::ops::Range<usize> = 36..48;
const PRIVACY_POLICY: std::ops::Range<usize> = 68..82;

pub struct LoginScreen {
    email: LabeledTextField,
    password: LabeledTextField,
    terms: AnnotatedText,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self {
            email: LabeledTextField::new("Email address").keyboard(KeyboardType::Email),
            password: LabeledTextField::new("Password (8+ characters)")
                .keyboard(KeyboardType::Password)
                .visual_transformation(VisualTransformation::Password),
            terms: AnnotatedText::new(TERMS)
                .underline(TERMS_OF_USE)
                .underline(PRIVACY_POLICY),
        }
    }
}

impl LoginScreen {
    const PADDING: i8 = 16;
    const HEADING_BASELINE: f32 = 184.0;

    /// Submit. Credentials are not checked.
    pub fn on_log_in(nav: &mut NavController) -> NavOutcome {
        nav.navigate(Route::Home, NavOptions::default())
    }
}

impl Screen for LoginScreen {
    fn route(&self) -> Route {
        Route::Login
    }

    fn show(&mut self, ctx: &egui::Context, state: &mut ScreenState<'_>) {
        let theme = state.theme;
        let p = &theme.palette;
        let t = &theme.typography;
        let mut log_in = false;

        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(p.background)
                    .inner_margin(Margin::same(Self::PADDING)),
            )
            .show(ctx, |ui| {
                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    let heading = galley(ui, HEADING, t.h1.clone(), p.on_background);
                    baseline_label(ui, heading, Self::HEADING_BASELINE, 0.0, p.on_background);

                    self.email.show(ui, theme);
                    self.password.show(ui, theme);

                    let job = self.terms.layout_job(
                        t.body2.clone(),
                        p.on_background,
                        Align::Center,
                        ui.available_width(),
                    );
                    let terms = ui.painter().layout_job(job);
                    baseline_label(ui, terms, 24.0, 16.0, p.on_background);

                    if ui.add(ThemedButton::new("Log in", theme)).clicked() {
                        log_in = true;
                    }
                });
            });

        if log_in {
            Self::on_log_in(state.nav);
        }
    }
}
