pub mod frame;
pub mod frame_json;
pub mod renderer;
pub mod span;
pub mod style;
pub mod theme;

pub use frame::{CursorPos, Frame, Line};
pub use renderer::Renderer;
pub use span::Span;
pub use style::{Color, Style};
pub use theme::Theme;
