use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub tagline: Style,
    pub heading: Style,
    pub label: Style,
    pub focused_label: Style,
    pub value: Style,
    pub error: Style,
    pub hint: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            title: Style::new().with_color(Color::Red).with_bold(),
            tagline: Style::new().with_color(Color::White).with_dim(),
            heading: Style::new().with_color(Color::Cyan).with_bold(),
            label: Style::new(),
            focused_label: Style::new().with_bold(),
            value: Style::new(),
            error: Style::new().with_color(Color::Red),
            hint: Style::new().with_color(Color::DarkGrey),
        }
    }
}
