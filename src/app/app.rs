use crate::app::{Action, ActionBindings};
use crate::form::Form;
use crate::input::Input;
use crate::router::Route;
use crate::terminal::KeyEvent;
use crate::ui::frame::Frame;
use crate::ui::frame_json;
use serde_json::json;

/// Top-level state: the active route, the form mounted on it, and keyboard
/// focus. Navigating remounts the target screen with fresh empty fields.
pub struct App {
    route: Route,
    form: Form,
    bindings: ActionBindings,
    focus: usize,
    should_exit: bool,
}

impl App {
    pub fn new(route: Route) -> Self {
        let mut app = Self {
            route,
            form: route.mount(),
            bindings: ActionBindings::for_route(route),
            focus: 0,
            should_exit: false,
        };
        app.sync_focus();
        app
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.bindings.lookup(&key) {
            Some(action) => self.apply(action),
            None => self.apply(Action::InputKey(key)),
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Exit => {
                self.should_exit = true;
            }
            Action::Submit => {
                self.form.submit();
            }
            Action::NextField => self.move_focus(1),
            Action::PrevField => self.move_focus(-1),
            Action::DeleteWord => {
                if let Some(input) = self.form.field_at_mut(self.focus) {
                    input.delete_word();
                }
            }
            Action::DeleteWordForward => {
                if let Some(input) = self.form.field_at_mut(self.focus) {
                    input.delete_word_forward();
                }
            }
            Action::Navigate(route) => self.navigate(route),
            Action::InputKey(key) => {
                if let Some(input) = self.form.field_at_mut(self.focus) {
                    input.handle_key(key.code, key.modifiers);
                }
            }
        }
    }

    pub fn navigate(&mut self, route: Route) {
        self.route = route;
        self.form = route.mount();
        self.bindings = ActionBindings::for_route(route);
        self.focus = 0;
        self.sync_focus();
    }

    pub fn focused_input(&self) -> Option<&dyn Input> {
        self.form.field_at(self.focus)
    }

    fn move_focus(&mut self, direction: isize) {
        let len = self.form.field_count() as isize;
        if len == 0 {
            return;
        }
        self.focus = ((self.focus as isize + direction + len) % len) as usize;
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        for index in 0..self.form.field_count() {
            let focused = index == self.focus;
            if let Some(input) = self.form.field_at_mut(index) {
                input.set_focused(focused);
            }
        }
    }

    /// Headless snapshot used by `--dump-frame`: route, field values, errors
    /// and the rendered frame.
    pub fn snapshot(&self, frame: &Frame) -> serde_json::Value {
        json!({
            "route": self.route.path(),
            "fields": self.form.field_set(),
            "errors": self.form.errors(),
            "frame": frame_json::frame_to_json(frame),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::app::Action;
    use crate::form::{FormStatus, MSG_INVALID_PASSWORD};
    use crate::router::Route;
    use crate::terminal::{KeyCode, KeyEvent};

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyEvent::char(ch));
        }
    }

    #[test]
    fn typing_edits_the_focused_field_only() {
        let mut app = App::new(Route::Login);
        type_str(&mut app, "a@b.com");
        assert_eq!(app.form().value_of("EmailAddress").as_deref(), Some("a@b.com"));
        assert_eq!(app.form().value_of("Password").as_deref(), Some(""));
    }

    #[test]
    fn tab_moves_focus_and_wraps() {
        let mut app = App::new(Route::Login);
        assert_eq!(app.focus(), 0);
        app.handle_key(KeyEvent::plain(KeyCode::Tab));
        assert_eq!(app.focus(), 1);
        app.handle_key(KeyEvent::plain(KeyCode::Tab));
        assert_eq!(app.focus(), 0);
        app.handle_key(KeyEvent::plain(KeyCode::Up));
        assert_eq!(app.focus(), 1);
    }

    #[test]
    fn register_end_to_end_via_keys() {
        let mut app = App::new(Route::Register);
        type_str(&mut app, "Jane");
        app.handle_key(KeyEvent::plain(KeyCode::Tab));
        type_str(&mut app, "Doe");
        app.handle_key(KeyEvent::plain(KeyCode::Tab));
        type_str(&mut app, "jane@doe.com");
        app.handle_key(KeyEvent::plain(KeyCode::Tab));
        type_str(&mut app, "Secret12");

        app.handle_key(KeyEvent::plain(KeyCode::Enter));
        assert_eq!(app.form().status(), FormStatus::Clean);
        assert!(app.form().errors().is_empty());
    }

    #[test]
    fn failed_submit_flags_only_the_bad_field() {
        let mut app = App::new(Route::Register);
        type_str(&mut app, "Jane");
        app.handle_key(KeyEvent::plain(KeyCode::Tab));
        type_str(&mut app, "Doe");
        app.handle_key(KeyEvent::plain(KeyCode::Tab));
        type_str(&mut app, "jane@doe.com");
        app.handle_key(KeyEvent::plain(KeyCode::Tab));
        type_str(&mut app, "secret");

        app.handle_key(KeyEvent::plain(KeyCode::Enter));
        assert_eq!(app.form().errors().len(), 1);
        assert_eq!(
            app.form().error_for("Password"),
            Some(MSG_INVALID_PASSWORD)
        );
    }

    #[test]
    fn submitting_twice_yields_identical_errors() {
        let mut app = App::new(Route::Login);
        app.handle_key(KeyEvent::plain(KeyCode::Enter));
        let first = app.form().errors().clone();
        app.handle_key(KeyEvent::plain(KeyCode::Enter));
        assert_eq!(app.form().errors(), &first);
    }

    #[test]
    fn navigation_remounts_an_empty_form() {
        let mut app = App::new(Route::Login);
        type_str(&mut app, "half-typed");
        app.handle_key(KeyEvent::plain(KeyCode::Enter));
        assert!(!app.form().errors().is_empty());

        app.handle_key(KeyEvent::ctrl(KeyCode::Char('s')));
        assert_eq!(app.route(), Route::Register);
        assert!(app.form().errors().is_empty());
        assert!(app.form().field_set().values().all(|v| v.is_empty()));

        app.apply(Action::Navigate(Route::Login));
        assert_eq!(app.form().value_of("EmailAddress").as_deref(), Some(""));
    }

    #[test]
    fn esc_exits_from_login_but_backs_out_of_forgot_password() {
        let mut app = App::new(Route::ForgotPassword);
        app.handle_key(KeyEvent::plain(KeyCode::Esc));
        assert_eq!(app.route(), Route::Login);
        assert!(!app.should_exit());

        app.handle_key(KeyEvent::plain(KeyCode::Esc));
        assert!(app.should_exit());
    }
}
