use crate::core::state::Snapshot;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Display, Keypad, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

const HELP_TEXT: &str = "Enter = · Tab 2nd · Bksp ⌫ · Del C · Esc quit";

/// Draws one frame from the latest rendered snapshot.
pub fn draw_ui(frame: &mut Frame, snapshot: &Snapshot, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(4), Min(0), Length(1)]);
    let [title_area, display_area, keypad_area, help_area] = layout.areas(frame.area());

    TitleBar::from_snapshot(snapshot).render(frame, title_area);
    Display::new(snapshot).render(frame, display_area);
    Keypad::new(&mut tui.keypad, snapshot).render(frame, keypad_area);

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().add_modifier(Modifier::DIM)),
        help_area,
    );
}
