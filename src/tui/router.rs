//! # Input Router
//!
//! Turns a `TuiEvent` into the `Action` it means. This is the layer that
//! gives the 2nd flag its effect: a latched 2nd makes the keypad hand back
//! each button's alternate action.
//!
//! Quit, hover and resize events never reach here; the event loop handles
//! them itself.

use crate::core::action::Action;
use crate::tui::components::KeypadState;
use crate::tui::event::TuiEvent;

pub fn route(event: &TuiEvent, keypad: &KeypadState, second_active: bool) -> Option<Action> {
    match *event {
        TuiEvent::Submit => Some(Action::Compute),
        TuiEvent::Backspace => Some(Action::Delete),
        TuiEvent::Delete => Some(Action::Clear),
        TuiEvent::Tab => Some(Action::ToggleSecondFunction),
        TuiEvent::Key(c) => keypad.find_key(c).map(|b| b.action(second_active)),
        TuiEvent::MouseClick(column, row) => keypad
            .hit_test(column, row)
            .map(|b| b.action(second_active)),
        TuiEvent::ForceQuit | TuiEvent::Quit | TuiEvent::MouseMove(..) | TuiEvent::Resize => None,
    }
}
