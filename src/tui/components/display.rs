//! # Display Component
//!
//! The two-line readout above the keypad:
//!
//! ```text
//! ╭──────────────────────────────╮
//! │                         12 × │   ← pending line (dim)
//! │                       3.5    │   ← current operand (bold)
//! ╰──────────────────────────────╯
//! ```
//!
//! Both lines are right-aligned. When a line is wider than the box, its
//! leftmost characters are dropped so the least significant digits stay
//! visible. The error token is drawn in red.

use crate::core::state::Snapshot;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

pub struct Display<'a> {
    pub snapshot: &'a Snapshot,
}

impl<'a> Display<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }
}

/// Keeps the rightmost characters of `text` that fit in `width` columns.
pub fn truncate_left(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    text[start..].to_string()
}

impl Component for Display<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_type(BorderType::Rounded);
        let inner = block.inner(area);
        let width = inner.width as usize;

        let operand_style = if self.snapshot.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::styled(
                truncate_left(&self.snapshot.pending_line(), width),
                Style::default().add_modifier(Modifier::DIM),
            ),
            Line::styled(
                truncate_left(&self.snapshot.current_operand, width),
                operand_style,
            ),
        ];

        frame.render_widget(Paragraph::new(lines).right_aligned().block(block), area);
    }
}
