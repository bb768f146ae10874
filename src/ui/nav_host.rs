//! Binds a [`NavController`] to screen factories and keeps exactly one
//! screen instance alive: the one for the current back-stack entry.

use eframe::egui;

use crate::error::AppError;
use crate::nav::{NavController, NavGraph, Route};
use crate::ui::screen::{Screen, ScreenState};
use crate::ui::theme::AppTheme;

pub type ScreenFactory = Box<dyn Fn() -> Box<dyn Screen>>;

pub struct NavHostBuilder {
    graph: NavGraph,
    factories: Vec<(Route, ScreenFactory)>,
}

impl NavHostBuilder {
    /// Register `route`, drawn by screens produced by `factory`.
    pub fn composable(
        mut self,
        route: Route,
        factory: impl Fn() -> Box<dyn Screen> + 'static,
    ) -> Self {
        self.graph.register(route);
        self.factories.retain(|(r, _)| *r != route);
        self.factories.push((route, Box::new(factory)));
        self
    }

    /// # Panics
    /// If the start destination has no screen.
    pub fn build(self) -> NavHost {
        let start = self.graph.start();
        if !self.factories.iter().any(|(r, _)| *r == start) {
            panic!("{}", AppError::UnregisteredRoute { route: start, start });
        }
        NavHost {
            controller: NavController::new(self.graph),
            factories: self.factories,
            active: None,
        }
    }
}

struct Active {
    generation: u64,
    screen: Box<dyn Screen>,
}

pub struct NavHost {
    controller: NavController,
    factories: Vec<(Route, ScreenFactory)>,
    active: Option<Active>,
}

impl NavHost {
    pub fn builder(start: Route) -> NavHostBuilder {
        NavHostBuilder {
            graph: NavGraph::new(start),
            factories: Vec::new(),
        }
    }

    pub fn controller(&self) -> &NavController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut NavController {
        &mut self.controller
    }

    /// Screen for the current entry, created if the stack moved since the
    /// last call.
    pub fn active_screen(&mut self) -> &dyn Screen {
        &*self.sync().screen
    }

    pub fn active_screen_mut(&mut self) -> &mut dyn Screen {
        &mut *self.sync().screen
    }

    fn sync(&mut self) -> &mut Active {
        let generation = self.controller.generation();
        if self
            .active
            .as_ref()
            .is_none_or(|active| active.generation != generation)
        {
            self.active = None;
        }

        let controller = &self.controller;
        let route = controller.current();
        let factories = &self.factories;
        self.active.get_or_insert_with(|| {
            let Some((_, factory)) = factories.iter().find(|(r, _)| *r == route) else {
                let start = controller.graph().start();
                panic!("{}", AppError::UnregisteredRoute { route, start });
            };
            log::debug!(
                "compose {route} (generation {generation}, stack {:?})",
                controller.back_stack()
            );
            Active {
                generation,
                screen: factory(),
            }
        })
    }

    /// Draw the current screen. A navigation during the draw schedules an
    /// immediate repaint so the destination shows before the next input.
    pub fn show(&mut self, ctx: &egui::Context, theme: &AppTheme) {
        let before = self.controller.generation();
        self.sync();

        let Self {
            controller, active, ..
        } = self;
        if let Some(active) = active {
            active.screen.show(
                ctx,
                &mut ScreenState {
                    theme,
                    nav: controller,
                },
            );
        }

        if self.controller.generation() != before {
            ctx.request_repaint();
        }
    }

    /// Route a back press: the active screen first, then this host's stack.
    pub fn back(&mut self) -> bool {
        self.active_screen_mut().on_back() || self.controller.pop_back()
    }
}
