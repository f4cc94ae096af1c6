//! # TitleBar Component
//!
//! Top status line showing the calculator's mode indicators.
//!
//! ## Props-in-Struct Pattern
//!
//! The indicators are stored as struct fields rather than passed to
//! `render()`, so the component fits the fixed `Component` signature:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::from_snapshot(&snapshot);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Layout
//!
//! 1. **Always**: `"scical | DEG"`
//! 2. **2nd latched**: `"scical | DEG | 2nd"`
//! 3. **Memory non-zero**: `"scical | DEG | M"`

use crate::core::state::{AngleMode, Snapshot};
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
pub struct TitleBar {
    pub angle_mode: AngleMode,
    pub second_function: bool,
    pub memory_in_use: bool,
}

impl TitleBar {
    pub fn new(angle_mode: AngleMode, second_function: bool, memory_in_use: bool) -> Self {
        Self {
            angle_mode,
            second_function,
            memory_in_use,
        }
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self::new(
            snapshot.angle_mode,
            snapshot.second_function,
            snapshot.memory_in_use,
        )
    }

    fn indicators(&self) -> Vec<&'static str> {
        let mut parts = vec![self.angle_mode.label()];
        if self.second_function {
            parts.push("2nd");
        }
        if self.memory_in_use {
            parts.push("M");
        }
        parts
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "scical",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        for indicator in self.indicators() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(indicator));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
