//! # Keypad Component
//!
//! The button grid. Each button carries its label, an optional keyboard
//! shortcut, and the action it sends, plus an alternate label/action used
//! while 2nd is latched. The engine only stores the 2nd flag; this table is
//! where that flag gets its meaning.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `KeypadState` lives in `TuiState` (layout, hitboxes, hover)
//! - `Keypad` is created each frame with borrowed state and the snapshot
//!
//! ```text
//! 2nd  DEG   MC    MR   M+   M−
//! MS   sin   cos   tan  π    e
//! x²   √x    xʸ    log  ln   mod
//! 1/x  |x|   n!    exp  (    )
//! 7    8     9     ÷    C
//! 4    5     6     ×    ⌫
//! 1    2     3     −    ±
//! 0    .     %     +    =
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::action::Action;
use crate::core::math::UnaryFn;
use crate::core::state::{Operation, Snapshot};
use crate::tui::component::Component;

/// Visual grouping, used for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Function,
    Memory,
    Control,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub kind: ButtonKind,
    pub key: Option<char>,
    pub action: Action,
    /// Label and action while 2nd is latched.
    pub second: Option<(&'static str, Action)>,
}

impl Button {
    fn new(label: &'static str, kind: ButtonKind, key: Option<char>, action: Action) -> Self {
        Self {
            label,
            kind,
            key,
            action,
            second: None,
        }
    }

    fn digit(c: char, label: &'static str) -> Self {
        Self::new(label, ButtonKind::Digit, Some(c), Action::digit(c))
    }

    fn op(label: &'static str, key: char, op: Operation) -> Self {
        Self::new(label, ButtonKind::Operator, Some(key), Action::ChooseOperation(op))
    }

    fn func(label: &'static str, key: char, kind: UnaryFn) -> Self {
        Self::new(label, ButtonKind::Function, Some(key), Action::Unary(kind))
    }

    fn memory(label: &'static str, key: char, action: Action) -> Self {
        Self::new(label, ButtonKind::Memory, Some(key), action)
    }

    fn control(label: &'static str, key: Option<char>, action: Action) -> Self {
        Self::new(label, ButtonKind::Control, key, action)
    }

    fn with_second(mut self, label: &'static str, action: Action) -> Self {
        self.second = Some((label, action));
        self
    }

    pub fn label(&self, second_active: bool) -> &'static str {
        match &self.second {
            Some((label, _)) if second_active => label,
            _ => self.label,
        }
    }

    pub fn action(&self, second_active: bool) -> Action {
        match &self.second {
            Some((_, action)) if second_active => action.clone(),
            _ => self.action.clone(),
        }
    }
}

/// The standard scientific layout, top row first.
pub fn standard_layout() -> Vec<Vec<Button>> {
    use ButtonKind::Control;

    vec![
        vec![
            Button::control("2nd", None, Action::ToggleSecondFunction),
            Button::control("DEG", Some('g'), Action::CycleAngleMode),
            Button::memory("MC", 'C', Action::MemoryClear),
            Button::memory("MR", 'R', Action::MemoryRecall),
            Button::memory("M+", 'P', Action::MemoryAdd),
            Button::memory("M−", 'N', Action::MemorySubtract),
        ],
        vec![
            Button::memory("MS", 'S', Action::MemoryStore),
            Button::func("sin", 's', UnaryFn::Sin).with_second("sin⁻¹", Action::Unary(UnaryFn::Asin)),
            Button::func("cos", 'c', UnaryFn::Cos).with_second("cos⁻¹", Action::Unary(UnaryFn::Acos)),
            Button::func("tan", 't', UnaryFn::Tan).with_second("tan⁻¹", Action::Unary(UnaryFn::Atan)),
            Button::new("π", ButtonKind::Digit, Some('p'), Action::AppendPi),
            Button::new("e", ButtonKind::Digit, Some('e'), Action::AppendE),
        ],
        vec![
            Button::func("x²", 'q', UnaryFn::Square).with_second("x³", Action::Unary(UnaryFn::Cube)),
            Button::func("√x", 'r', UnaryFn::Sqrt)
                .with_second("ʸ√x", Action::ChooseOperation(Operation::Root)),
            Button::op("xʸ", '^', Operation::Pow),
            Button::func("log", 'l', UnaryFn::Log10).with_second("10ˣ", Action::Unary(UnaryFn::Pow10)),
            Button::func("ln", 'n', UnaryFn::Ln).with_second("eˣ", Action::Unary(UnaryFn::Exp)),
            Button::op("mod", 'm', Operation::Mod),
        ],
        vec![
            Button::func("1/x", 'i', UnaryFn::Reciprocal),
            Button::func("|x|", 'a', UnaryFn::Abs),
            Button::func("n!", '!', UnaryFn::Factorial),
            Button::func("exp", 'x', UnaryFn::Exp),
            Button::new("(", ButtonKind::Digit, Some('('), Action::Append(String::from("("))),
            Button::new(")", ButtonKind::Digit, Some(')'), Action::Append(String::from(")"))),
        ],
        vec![
            Button::digit('7', "7"),
            Button::digit('8', "8"),
            Button::digit('9', "9"),
            Button::op("÷", '/', Operation::Div),
            Button::new("C", Control, None, Action::Clear),
        ],
        vec![
            Button::digit('4', "4"),
            Button::digit('5', "5"),
            Button::digit('6', "6"),
            Button::op("×", '*', Operation::Mul),
            Button::new("⌫", Control, None, Action::Delete),
        ],
        vec![
            Button::digit('1', "1"),
            Button::digit('2', "2"),
            Button::digit('3', "3"),
            Button::op("−", '-', Operation::Sub),
            Button::control("±", Some('~'), Action::ToggleSign),
        ],
        vec![
            Button::digit('0', "0"),
            Button::digit('.', "."),
            Button::func("%", '%', UnaryFn::Percentage),
            Button::op("+", '+', Operation::Add),
            Button::new("=", ButtonKind::Operator, Some('='), Action::Compute),
        ],
    ]
}

/// A button's on-screen rectangle from the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hitbox {
    area: Rect,
    row: usize,
    col: usize,
}

/// Persistent keypad state: the layout, cached hitboxes and hover position.
pub struct KeypadState {
    pub rows: Vec<Vec<Button>>,
    pub hovered: Option<(usize, usize)>,
    hitboxes: Vec<Hitbox>,
}

impl Default for KeypadState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadState {
    pub fn new() -> Self {
        Self {
            rows: standard_layout(),
            hovered: None,
            hitboxes: Vec::new(),
        }
    }

    pub fn button(&self, row: usize, col: usize) -> Option<&Button> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Finds the button bound to a keyboard shortcut.
    pub fn find_key(&self, key: char) -> Option<&Button> {
        self.rows.iter().flatten().find(|b| b.key == Some(key))
    }

    /// Finds the button under a screen position, using the last render's layout.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<&Button> {
        self.hit_index(column, row)
            .and_then(|(r, c)| self.button(r, c))
    }

    pub fn hover(&mut self, column: u16, row: u16) {
        self.hovered = self.hit_index(column, row);
    }

    fn hit_index(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let position = Position::new(column, row);
        self.hitboxes
            .iter()
            .find(|h| h.area.contains(position))
            .map(|h| (h.row, h.col))
    }
}

/// Transient render wrapper for the keypad.
pub struct Keypad<'a> {
    state: &'a mut KeypadState,
    snapshot: &'a Snapshot,
}

impl<'a> Keypad<'a> {
    pub fn new(state: &'a mut KeypadState, snapshot: &'a Snapshot) -> Self {
        Self { state, snapshot }
    }

    fn label(&self, button: &Button) -> &'static str {
        if button.action == Action::CycleAngleMode {
            return self.snapshot.angle_mode.label();
        }
        button.label(self.snapshot.second_function)
    }
}

fn button_style(button: &Button, second_active: bool, hovered: bool) -> Style {
    let base = match button.kind {
        ButtonKind::Digit => Style::default().fg(Color::White),
        ButtonKind::Operator => Style::default().fg(Color::Yellow),
        ButtonKind::Function => Style::default().fg(Color::Cyan),
        ButtonKind::Memory => Style::default().fg(Color::Magenta),
        ButtonKind::Control => Style::default().fg(Color::Red),
    };
    let base = if second_active && button.second.is_some() {
        base.add_modifier(Modifier::BOLD | Modifier::ITALIC)
    } else if button.action == Action::ToggleSecondFunction && second_active {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    };
    if hovered { base.bg(Color::DarkGray) } else { base }
}

impl Component for Keypad<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let row_count = self.state.rows.len();
        if row_count == 0 {
            return;
        }

        let row_areas = Layout::vertical(vec![Constraint::Fill(1); row_count]).split(area);
        let mut hitboxes = Vec::new();

        for (r, (row, row_area)) in self.state.rows.iter().zip(row_areas.iter()).enumerate() {
            let cells = Layout::horizontal(vec![Constraint::Fill(1); row.len()]).split(*row_area);
            for (c, (button, cell)) in row.iter().zip(cells.iter()).enumerate() {
                let hovered = self.state.hovered == Some((r, c));
                let style = button_style(button, self.snapshot.second_function, hovered);
                let label = self.label(button);

                let paragraph = if cell.height >= 3 {
                    let top = (cell.height - 3) / 2;
                    Paragraph::new(label).centered().block(
                        Block::bordered()
                            .border_type(BorderType::Rounded)
                            .border_style(style.add_modifier(Modifier::DIM))
                            .padding(Padding::top(top)),
                    )
                } else {
                    Paragraph::new(label).centered()
                };
                frame.render_widget(paragraph.style(style), *cell);

                hitboxes.push(Hitbox {
                    area: *cell,
                    row: r,
                    col: c,
                });
            }
        }

        self.state.hitboxes = hitboxes;
    }
}
