use crate::app::App;
use crate::router::Route;
use crate::ui::frame::{CursorPos, Frame, Line};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

const TITLE: &str = "LiveRace";
const TAGLINE: &str = "F1 LiveRace Telemetry & Strategy Simulator";
const RESET_BLURB: &str =
    "Provide the email address associated with your account to recover your password.";

const FIELD_INDENT: &str = "  ";
const FOCUS_MARKER: &str = "> ";

/// Builds the frame for the active screen: chrome at the top, one labeled
/// line per field with its error below it, key bindings at the bottom.
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn frame(&self, app: &App) -> Frame {
        let mut frame = Frame::new();

        frame.push_span(Span::styled(TITLE, self.theme.title));
        frame.push_span(Span::styled(TAGLINE, self.theme.tagline));
        frame.push_blank();
        frame.push_span(Span::styled(app.route().heading(), self.theme.heading));
        if app.route() == Route::ForgotPassword {
            frame.push_span(Span::styled(RESET_BLURB, self.theme.tagline));
        }
        frame.push_blank();

        for input in app.form().fields() {
            let marker = if input.is_focused() {
                FOCUS_MARKER
            } else {
                FIELD_INDENT
            };
            let label_style = if input.is_focused() {
                self.theme.focused_label
            } else {
                self.theme.label
            };
            let prefix = format!("{}{}: ", marker, input.label());

            if input.is_focused() {
                let col = (prefix.width() + input.cursor_offset_in_content()) as u16;
                frame.set_cursor(CursorPos {
                    row: frame.next_row(),
                    col,
                });
            }

            let mut line = Line::new();
            line.push(Span::styled(prefix, label_style));
            let mut content = input.render_content();
            content.style = self.theme.value;
            line.push(content);
            frame.push_line(line);

            if let Some(error) = app.form().error_for(input.id().as_str()) {
                frame.push_span(Span::styled(
                    format!("    ! {}", error),
                    self.theme.error,
                ));
            }
        }

        frame.push_blank();
        frame.push_span(Span::styled(footer(app.route()), self.theme.hint));

        frame
    }
}

fn footer(route: Route) -> &'static str {
    match route {
        Route::Login => {
            "Tab next · Enter submit · Ctrl+S sign up · Ctrl+F forgot password · Esc quit"
        }
        Route::Register => "Tab next · Enter submit · Ctrl+L log in · Esc back",
        Route::ForgotPassword => "Enter reset password · Esc back to log in",
    }
}

#[cfg(test)]
mod tests {
    use super::Renderer;
    use crate::app::App;
    use crate::form::MSG_INVALID_EMAIL;
    use crate::router::Route;
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::ui::Theme;
    use crate::ui::style::Color;

    fn frame_text(app: &App) -> Vec<String> {
        Renderer::new(Theme::default_theme())
            .frame(app)
            .lines()
            .iter()
            .map(|line| line.text())
            .collect()
    }

    #[test]
    fn login_frame_has_chrome_and_fields() {
        let app = App::new(Route::Login);
        let lines = frame_text(&app);
        assert_eq!(lines[0], "LiveRace");
        assert!(lines.iter().any(|l| l.contains("Log In")));
        assert!(lines.iter().any(|l| l.contains("Email Address: ")));
        assert!(lines.iter().any(|l| l.contains("Password: ")));
    }

    #[test]
    fn failed_submit_renders_red_error_below_the_field() {
        let mut app = App::new(Route::ForgotPassword);
        app.handle_key(KeyEvent::plain(KeyCode::Enter));

        let renderer = Renderer::new(Theme::default_theme());
        let frame = renderer.frame(&app);

        let error_line = frame
            .lines()
            .iter()
            .find(|line| line.text().contains(MSG_INVALID_EMAIL))
            .expect("error line rendered");
        assert_eq!(error_line.spans()[0].style.color, Some(Color::Red));
    }

    #[test]
    fn clean_submit_renders_no_error_lines() {
        let mut app = App::new(Route::ForgotPassword);
        for ch in "jane@doe.com".chars() {
            app.handle_key(KeyEvent::char(ch));
        }
        app.handle_key(KeyEvent::plain(KeyCode::Enter));

        let lines = frame_text(&app);
        assert!(lines.iter().all(|l| !l.contains("!")));
    }

    #[test]
    fn password_renders_masked() {
        let mut app = App::new(Route::Login);
        app.handle_key(KeyEvent::plain(KeyCode::Tab));
        for ch in "Secret12".chars() {
            app.handle_key(KeyEvent::char(ch));
        }

        let lines = frame_text(&app);
        let password_line = lines
            .iter()
            .find(|l| l.contains("Password: "))
            .expect("password line rendered");
        assert!(password_line.contains("********"));
        assert!(!password_line.contains("Secret12"));
    }

    #[test]
    fn cursor_follows_the_focused_field() {
        let mut app = App::new(Route::Login);
        for ch in "abc".chars() {
            app.handle_key(KeyEvent::char(ch));
        }

        let renderer = Renderer::new(Theme::default_theme());
        let cursor = renderer.frame(&app).cursor().expect("cursor set");
        // "> Email Address: " is 17 cells, plus the three typed characters.
        assert_eq!(cursor.col, 20);
    }
}
