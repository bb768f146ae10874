//! Home screen: bottom navigation bar over a nested tab graph.
//!
//! Every tab shows the same "Browse themes" content by default; a different
//! host can be passed to [`HomeScreen::new`] to give tabs their own screens.

use eframe::egui::{
    self, Align2, Color32, CornerRadius, Frame, Image, Margin, Rect, ScrollArea, Sense, Vec2,
    WidgetInfo, WidgetType, pos2, vec2,
};

use crate::assets::Icon;
use crate::catalog::{NAV_ITEMS, ThemeCard};
use crate::nav::{NavController, NavOptions, NavOutcome, Route};
use crate::ui::controls::LabeledTextField;
use crate::ui::controls::image::paint_cropped;
use crate::ui::controls::text::{baseline_label, galley};
use crate::ui::nav_host::NavHost;
use crate::ui::screen::{Screen, ScreenState};
use crate::ui::theme::AppTheme;

pub const BROWSE_HEADING: &str = "Browse themes";

/// Tab graph with every bar destination showing [`BrowseThemes`].
pub fn default_tabs() -> NavHost {
    NAV_ITEMS
        .into_iter()
        .fold(NavHost::builder(NAV_ITEMS[0]), |builder, route| {
            builder.composable(route, move || Box::new(BrowseThemes::new(route)))
        })
        .build()
}

pub struct HomeScreen {
    tabs: NavHost,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new(default_tabs())
    }
}

impl HomeScreen {
    const BAR_HEIGHT: f32 = 56.0;
    const ICON_SIZE: f32 = 24.0;
    const UNSELECTED_ALPHA: f32 = 0.74;

    pub fn new(tabs: NavHost) -> Self {
        Self { tabs }
    }

    pub fn selected_tab(&self) -> Route {
        self.tabs.controller().current()
    }

    /// Bar tap: single-top, popping back to the first tab.
    pub fn select_tab(&mut self, route: Route) -> NavOutcome {
        let nav = self.tabs.controller_mut();
        let options = NavOptions::tab(nav.graph());
        nav.navigate(route, options)
    }

    fn item_color(on_primary: Color32, selected: bool) -> Color32 {
        if selected {
            on_primary
        } else {
            on_primary.gamma_multiply(Self::UNSELECTED_ALPHA)
        }
    }

    fn bottom_bar(&mut self, ctx: &egui::Context, theme: &AppTheme) {
        let p = &theme.palette;
        let selected = self.selected_tab();
        let mut tapped = None;

        egui::TopBottomPanel::bottom("bottom_navigation")
            .exact_height(Self::BAR_HEIGHT)
            .show_separator_line(false)
            .frame(Frame::new().fill(p.primary))
            .show(ctx, |ui| {
                ui.columns(NAV_ITEMS.len(), |columns| {
                    for (ui, route) in columns.iter_mut().zip(NAV_ITEMS) {
                        let is_selected = route == selected;
                        let color = Self::item_color(p.on_primary, is_selected);
                        let (rect, response) = ui.allocate_exact_size(
                            vec2(ui.available_width(), Self::BAR_HEIGHT),
                            Sense::click(),
                        );
                        response.widget_info(|| {
                            WidgetInfo::selected(
                                WidgetType::SelectableLabel,
                                true,
                                is_selected,
                                route.label(),
                            )
                        });

                        let caption = galley(ui, route.label(), theme.typography.caption.clone(), color);
                        let stack = Self::ICON_SIZE + caption.size().y;
                        let top = rect.center().y - stack / 2.0;
                        if let Some(icon) = route.icon() {
                            let icon_rect = Rect::from_center_size(
                                pos2(rect.center().x, top + Self::ICON_SIZE / 2.0),
                                Vec2::splat(Self::ICON_SIZE),
                            );
                            Image::new(icon.source()).tint(color).paint_at(ui, icon_rect);
                        }
                        let caption_pos = pos2(
                            rect.center().x - caption.size().x / 2.0,
                            top + Self::ICON_SIZE,
                        );
                        ui.painter().galley(caption_pos, caption, color);

                        if response.clicked() {
                            tapped = Some(route);
                        }
                    }
                });
            });

        if let Some(route) = tapped {
            self.select_tab(route);
        }
    }
}

impl Screen for HomeScreen {
    fn route(&self) -> Route {
        Route::Home
    }

    fn show(&mut self, ctx: &egui::Context, state: &mut ScreenState<'_>) {
        self.bottom_bar(ctx, state.theme);
        self.tabs.show(ctx, state.theme);
    }

    fn nested_mut(&mut self) -> Option<&mut NavController> {
        Some(self.tabs.controller_mut())
    }
}

/// Search field above a horizontally scrolling strip of theme cards.
pub struct BrowseThemes {
    route: Route,
    search: LabeledTextField,
}

impl BrowseThemes {
    const CARD_SIZE: f32 = 136.0;
    const CARD_IMAGE_HEIGHT: f32 = 96.0;
    const CARD_SPACING: f32 = 8.0;
    const CARD_TEXT_INSET: f32 = 16.0;

    pub fn new(route: Route) -> Self {
        Self {
            route,
            search: LabeledTextField::new("Search").leading_icon(Icon::Search),
        }
    }

    fn card(ui: &mut egui::Ui, card: ThemeCard, theme: &AppTheme) {
        let p = &theme.palette;
        let radius = theme.shapes.small;
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(Self::CARD_SIZE), Sense::hover());
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Label, true, card.label()));

        ui.painter().rect_filled(rect, radius, p.surface);
        let image_rect = Rect::from_min_size(rect.min, vec2(rect.width(), Self::CARD_IMAGE_HEIGHT));
        let top_corners = CornerRadius {
            nw: radius.nw,
            ne: radius.ne,
            sw: 0,
            se: 0,
        };
        paint_cropped(ui, card.image().source(theme.dark), image_rect, top_corners);

        let text_top = image_rect.bottom();
        let text_mid = text_top + (rect.bottom() - text_top) / 2.0;
        ui.painter().text(
            pos2(rect.left() + Self::CARD_TEXT_INSET, text_mid),
            Align2::LEFT_CENTER,
            card.label(),
            theme.typography.h2.clone(),
            p.on_surface,
        );
    }
}

impl Screen for BrowseThemes {
    fn route(&self) -> Route {
        self.route
    }

    fn show(&mut self, ctx: &egui::Context, state: &mut ScreenState<'_>) {
        let theme = state.theme;
        let p = &theme.palette;
        let margin = Margin {
            left: 16,
            right: 16,
            top: 40,
            bottom: 16,
        };

        egui::CentralPanel::default()
            .frame(Frame::new().fill(p.background).inner_margin(margin))
            .show(ctx, |ui| {
                self.search.show(ui, theme);

                let heading = galley(ui, BROWSE_HEADING, theme.typography.h1.clone(), p.on_background);
                baseline_label(ui, heading, 32.0, 0.0, p.on_background);
                ui.add_space(16.0);

                ScrollArea::horizontal()
                    .id_salt("themes_row")
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing.x = Self::CARD_SPACING;
                            for card in ThemeCard::ALL {
                                Self::card(ui, card, theme);
                            }
                        });
                    });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavGraph;
    use crate::ui::test_support::{painted_texts, render};

    fn root() -> NavController {
        let mut graph = NavGraph::new(Route::Welcome);
        graph.register(Route::Home);
        NavController::new(graph)
    }

    #[test]
    fn tabs_start_on_home() {
        let mut home = HomeScreen::default();
        assert_eq!(home.selected_tab(), Route::Home);
        assert_eq!(home.tabs.controller().back_stack(), [Route::Home]);
        assert!(!home.on_back());
    }

    #[test]
    fn tab_selection_keeps_the_stack_shallow() {
        let mut home = HomeScreen::default();
        for route in [Route::Cart, Route::Favorites, Route::Profile, Route::Cart] {
            assert!(matches!(home.select_tab(route), NavOutcome::Navigated { to, .. } if to == route));
            assert_eq!(home.selected_tab(), route);
            assert_eq!(home.tabs.controller().back_stack().len(), 2);
        }

        let generation = home.tabs.controller().generation();
        assert_eq!(home.select_tab(Route::Cart), NavOutcome::AlreadyCurrent(Route::Cart));
        assert_eq!(home.tabs.controller().generation(), generation);

        // Back from a tab returns to the first tab before leaving Home.
        assert!(home.on_back());
        assert_eq!(home.selected_tab(), Route::Home);
        assert!(!home.on_back());
    }

    #[test]
    fn reselecting_the_start_tab_is_a_no_op() {
        let mut home = HomeScreen::default();
        assert_eq!(home.select_tab(Route::Home), NavOutcome::AlreadyCurrent(Route::Home));
        assert_eq!(home.tabs.controller().generation(), 0);
    }

    #[test]
    fn unselected_items_are_dimmed() {
        let on_primary = Color32::WHITE;
        assert_eq!(HomeScreen::item_color(on_primary, true), on_primary);
        assert_ne!(HomeScreen::item_color(on_primary, false), on_primary);
    }

    #[test]
    fn every_tab_browses_themes_by_default() {
        let mut tabs = default_tabs();
        for route in NAV_ITEMS {
            let options = NavOptions::tab(tabs.controller().graph());
            tabs.controller_mut().navigate(route, options);
            assert_eq!(tabs.active_screen().route(), route);
        }
    }

    #[test]
    fn renders_bar_heading_and_cards_in_catalog_order() {
        for dark in [false, true] {
            let theme = AppTheme::new(dark);
            let ctx = egui::Context::default();
            let mut nav = root();
            let mut home = HomeScreen::default();
            let output = render(&ctx, |ctx| {
                home.show(ctx, &mut ScreenState { theme: &theme, nav: &mut nav });
            });
            let texts = painted_texts(&output);

            for expected in ["Search", BROWSE_HEADING, "Home", "Favorites", "Profile", "Cart"] {
                assert!(texts.iter().any(|t| t == expected), "{expected} missing: {texts:?}");
            }
            let cards: Vec<_> = texts
                .iter()
                .filter(|t| ThemeCard::ALL.iter().any(|c| c.label() == t.as_str()))
                .map(String::as_str)
                .collect();
            let expected: Vec<_> = ThemeCard::ALL.iter().map(|c| c.label()).collect();
            assert_eq!(cards, expected);
        }
    }

    #[test]
    fn search_field_has_a_leading_icon_and_starts_empty() {
        let browse = BrowseThemes::new(Route::Favorites);
        assert_eq!(browse.route(), Route::Favorites);
        assert_eq!(browse.search.label(), "Search");
        assert_eq!(browse.search.text(), "");
    }
}
