pub mod action;
pub mod app;
pub mod bindings;

pub use action::Action;
pub use app::App;
pub use bindings::{ActionBindings, KeyBinding};
