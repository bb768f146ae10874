//! Reusable controls shared by the screens.

pub mod button;
pub mod image;
pub mod text;
pub mod text_field;

pub use button::ThemedButton;
pub use text_field::{KeyboardType, LabeledTextField, VisualTransformation};
