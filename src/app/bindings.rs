use crate::app::Action;
use crate::router::Route;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn key(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn from_key_event(event: &KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Key-to-action table for one screen. The links the browser version renders
/// as anchors become per-screen navigation bindings here.
pub struct ActionBindings {
    bindings: HashMap<KeyBinding, Action>,
}

impl ActionBindings {
    pub fn for_route(route: Route) -> Self {
        let mut table = Self {
            bindings: HashMap::new(),
        };
        table.setup_common_bindings();
        table.setup_route_bindings(route);
        table
    }

    fn setup_common_bindings(&mut self) {
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Action::Exit);

        self.bind(KeyBinding::key(KeyCode::Enter), Action::Submit);

        self.bind(KeyBinding::key(KeyCode::Tab), Action::NextField);
        self.bind(KeyBinding::key(KeyCode::Down), Action::NextField);
        self.bind(KeyBinding::shift(KeyCode::BackTab), Action::PrevField);
        self.bind(KeyBinding::key(KeyCode::Up), Action::PrevField);

        self.bind(KeyBinding::ctrl(KeyCode::Backspace), Action::DeleteWord);
        self.bind(KeyBinding::ctrl(KeyCode::Char('w')), Action::DeleteWord);
        self.bind(KeyBinding::ctrl(KeyCode::Delete), Action::DeleteWordForward);
    }

    fn setup_route_bindings(&mut self, route: Route) {
        match route {
            Route::Login => {
                self.bind(
                    KeyBinding::ctrl(KeyCode::Char('s')),
                    Action::Navigate(Route::Register),
                );
                self.bind(
                    KeyBinding::ctrl(KeyCode::Char('f')),
                    Action::Navigate(Route::ForgotPassword),
                );
                self.bind(KeyBinding::key(KeyCode::Esc), Action::Exit);
            }
            Route::Register => {
                self.bind(
                    KeyBinding::ctrl(KeyCode::Char('l')),
                    Action::Navigate(Route::Login),
                );
                self.bind(KeyBinding::key(KeyCode::Esc), Action::Navigate(Route::Login));
            }
            Route::ForgotPassword => {
                // The "Back" button.
                self.bind(KeyBinding::key(KeyCode::Esc), Action::Navigate(Route::Login));
            }
        }
    }

    pub fn bind(&mut self, key: KeyBinding, action: Action) {
        self.bindings.insert(key, action);
    }

    pub fn lookup(&self, key_event: &KeyEvent) -> Option<Action> {
        self.bindings
            .get(&KeyBinding::from_key_event(key_event))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::ActionBindings;
    use crate::app::Action;
    use crate::router::Route;
    use crate::terminal::{KeyCode, KeyEvent};

    #[test]
    fn login_links_to_signup_and_forgot_password() {
        let table = ActionBindings::for_route(Route::Login);
        assert!(matches!(
            table.lookup(&KeyEvent::ctrl(KeyCode::Char('s'))),
            Some(Action::Navigate(Route::Register))
        ));
        assert!(matches!(
            table.lookup(&KeyEvent::ctrl(KeyCode::Char('f'))),
            Some(Action::Navigate(Route::ForgotPassword))
        ));
    }

    #[test]
    fn forgot_password_esc_goes_back_to_login() {
        let table = ActionBindings::for_route(Route::ForgotPassword);
        assert!(matches!(
            table.lookup(&KeyEvent::plain(KeyCode::Esc)),
            Some(Action::Navigate(Route::Login))
        ));
    }

    #[test]
    fn plain_characters_are_not_bound() {
        let table = ActionBindings::for_route(Route::Login);
        assert!(table.lookup(&KeyEvent::char('s')).is_none());
    }
}
