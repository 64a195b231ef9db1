pub mod app;
pub mod form;
pub mod input;
pub mod router;
pub mod terminal;
pub mod ui;
pub mod validate;

pub use app::action;
pub use app::bindings;

pub use form::field;

pub use input::password_input;
pub use input::text_input;

pub use terminal::input_event;
pub use terminal::terminal_event;

pub use ui::frame;
pub use ui::frame_json;
pub use ui::renderer;
pub use ui::span;
pub use ui::style;
pub use ui::theme;

pub use validate::tlds;
pub use validate::validators;
