//! UI layer: App orchestrator, theme provider, navigation host, controls and screens.

pub mod app;
pub mod colors;
pub mod controls;
pub mod nav_host;
pub mod screen;
pub mod screens;
pub mod theme;
