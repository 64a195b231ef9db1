use crate::router::Route;
use crate::terminal::KeyEvent;

#[derive(Debug, Clone, Copy)]
pub enum Action {
    Exit,
    Submit,
    NextField,
    PrevField,
    DeleteWord,
    DeleteWordForward,
    Navigate(Route),
    InputKey(KeyEvent),
}
