//! Navigation layer: routes and the back-stack controller.

pub mod controller;
pub mod route;

pub use controller::{NavController, NavGraph, NavOptions, NavOutcome};
pub use route::Route;
