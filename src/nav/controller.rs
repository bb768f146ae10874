//! Back-stack navigation with single-top and pop-to-start semantics.
//!
//! The controller is pure state: it knows which routes exist and which one is
//! on top, but nothing about how screens are drawn. [`crate::ui::nav_host`]
//! pairs it with the screen factories.

use crate::error::{AppError, Result};
use crate::nav::Route;

/// The set of destinations a controller may navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGraph {
    start: Route,
    destinations: Vec<Route>,
}

impl NavGraph {
    pub fn new(start: Route) -> Self {
        Self {
            start,
            destinations: vec![start],
        }
    }

    /// Register a destination. Registering twice is a no-op.
    pub fn register(&mut self, route: Route) {
        if !self.destinations.contains(&route) {
            self.destinations.push(route);
        }
    }

    pub fn start(&self) -> Route {
        self.start
    }

    pub fn contains(&self, route: Route) -> bool {
        self.destinations.contains(&route)
    }
}

/// Per-call navigation behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavOptions {
    /// Navigating to the route already on top does nothing.
    pub single_top: bool,
    /// Pop every entry above the last occurrence of this route before pushing.
    pub pop_up_to: Option<Route>,
}

impl NavOptions {
    /// Tab-bar semantics: single-top, popping back to the graph's start.
    pub fn tab(graph: &NavGraph) -> Self {
        Self {
            single_top: true,
            pop_up_to: Some(graph.start()),
        }
    }
}

/// What a navigate call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Navigated { from: Route, to: Route },
    /// Single-top hit: the route was already current, nothing changed.
    AlreadyCurrent(Route),
}

/// Owns the back stack of one navigation graph.
///
/// `generation` increments on every navigation event; observers compare it
/// against the value they last rendered to know when to rebuild.
#[derive(Debug, Clone)]
pub struct NavController {
    graph: NavGraph,
    back_stack: Vec<Route>,
    generation: u64,
}

impl NavController {
    pub fn new(graph: NavGraph) -> Self {
        let back_stack = vec![graph.start()];
        Self {
            graph,
            back_stack,
            generation: 0,
        }
    }

    pub fn graph(&self) -> &NavGraph {
        &self.graph
    }

    /// The destination on top of the back stack.
    pub fn current(&self) -> Route {
        // The stack is never empty: `pop_back` refuses to remove the root.
        self.back_stack.last().copied().unwrap_or(self.graph.start)
    }

    pub fn back_stack(&self) -> &[Route] {
        &self.back_stack
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Navigate, reporting unregistered routes as an error.
    pub fn try_navigate(&mut self, route: Route, options: NavOptions) -> Result<NavOutcome> {
        if !self.graph.contains(route) {
            return Err(AppError::UnregisteredRoute {
                route,
                start: self.graph.start,
            });
        }

        let from = self.current();
        if options.single_top && from == route {
            log::debug!("navigate: {route} already current");
            return Ok(NavOutcome::AlreadyCurrent(route));
        }

        if let Some(target) = options.pop_up_to
            && let Some(pos) = self.back_stack.iter().rposition(|&r| r == target)
        {
            self.back_stack.truncate(pos + 1);
        }

        if !(options.single_top && self.current() == route) {
            self.back_stack.push(route);
        }
        self.generation += 1;
        log::info!("navigate: {from} -> {route} (depth {})", self.back_stack.len());
        Ok(NavOutcome::Navigated { from, to: route })
    }

    /// Navigate, failing fast on an unregistered route.
    ///
    /// # Panics
    /// If `route` was never registered in this controller's graph.
    pub fn navigate(&mut self, route: Route, options: NavOptions) -> NavOutcome {
        match self.try_navigate(route, options) {
            Ok(outcome) => outcome,
            Err(e) => panic!("{e}"),
        }
    }

    /// Pop the top entry. The root entry is never popped.
    pub fn pop_back(&mut self) -> bool {
        if self.back_stack.len() <= 1 {
            return false;
        }
        let from = self.back_stack.pop();
        self.generation += 1;
        if let Some(from) = from {
            log::info!("back: {from} -> {}", self.current());
        }
        true
    }
}
