//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the keypad and
//! display, and translates keyboard and mouse events into `core::Action`
//! values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The engine pushes a `Snapshot` into [`DisplaySink`] whenever it renders;
//! the frame is drawn from that snapshot, never from live engine state. So
//! operations that do not render (memory store/add/subtract/clear) leave the
//! screen as it was until the next rendering operation.
//!
//! The loop only redraws when the sink is dirty, a resize or hover change
//! happened, or on the first frame. Idle, it sleeps in 250ms polls.

mod component;
mod components;
mod event;
mod router;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::update;
use crate::core::config::ResolvedConfig;
use crate::core::engine::{Engine, RenderSink};
use crate::core::state::Snapshot;
use crate::tui::components::KeypadState;
use crate::tui::event::{TuiEvent, poll_event};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// Render sink that keeps the most recent snapshot for the next frame.
#[derive(Debug, Default)]
pub struct DisplaySink {
    latest: Snapshot,
    dirty: bool,
}

impl DisplaySink {
    pub fn latest(&self) -> &Snapshot {
        &self.latest
    }

    /// Returns whether a render arrived since the last call, and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl RenderSink for DisplaySink {
    fn render(&mut self, snapshot: &Snapshot) {
        self.latest = snapshot.clone();
        self.dirty = true;
    }
}

/// TUI-specific presentation state (not part of the calculator)
pub struct TuiState {
    pub keypad: KeypadState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            keypad: KeypadState::new(),
        }
    }
}

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Redraw,
    Quit,
}

/// Applies one event to the engine and presentation state.
fn handle_event(engine: &mut Engine<DisplaySink>, tui: &mut TuiState, event: TuiEvent) -> Flow {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Flow::Quit,
        TuiEvent::Resize => Flow::Redraw,
        TuiEvent::MouseMove(column, row) => {
            let before = tui.keypad.hovered;
            tui.keypad.hover(column, row);
            if tui.keypad.hovered == before {
                Flow::Continue
            } else {
                Flow::Redraw
            }
        }
        other => {
            let second = engine.sink().latest().second_function;
            match router::route(&other, &tui.keypad, second) {
                Some(action) => {
                    update(engine, action);
                    Flow::Continue
                }
                None => {
                    debug!("Unbound event {:?}", other);
                    Flow::Continue
                }
            }
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let mut engine = Engine::with_angle_mode(DisplaySink::default(), config.angle_mode);
    let initial = engine.snapshot();
    engine.sink_mut().render(&initial);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        let mut needs_redraw = true;
        loop {
            if engine.sink_mut().take_dirty() || needs_redraw {
                let snapshot = engine.sink().latest().clone();
                terminal.draw(|f| ui::draw_ui(f, &snapshot, &mut tui))?;
                needs_redraw = false;
            }

            let first_event = poll_event(IDLE_POLL)?;
            let mut pending = first_event;
            while let Some(event) = pending {
                match handle_event(&mut engine, &mut tui, event) {
                    Flow::Quit => {
                        info!("Quit requested");
                        return Ok(());
                    }
                    Flow::Redraw => needs_redraw = true,
                    Flow::Continue => {}
                }
                pending = poll_event(Duration::ZERO)?;
            }
        }
    });
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{AngleMode, ERROR_TOKEN};

    fn setup() -> (Engine<DisplaySink>, TuiState) {
        (Engine::new(DisplaySink::default()), TuiState::new())
    }

    fn keys(engine: &mut Engine<DisplaySink>, tui: &mut TuiState, input: &str) {
        for c in input.chars() {
            let event = match c {
                '\n' => TuiEvent::Submit,
                '\t' => TuiEvent::Tab,
                c => TuiEvent::Key(c),
            };
            assert_eq!(handle_event(engine, tui, event), Flow::Continue);
        }
    }

    #[test]
    fn test_display_sink_tracks_latest() {
        let mut sink = DisplaySink::default();
        assert!(!sink.take_dirty());

        let snapshot = Snapshot {
            current_operand: "9".to_string(),
            ..Snapshot::default()
        };
        sink.render(&snapshot);
        assert!(sink.take_dirty());
        assert!(!sink.take_dirty());
        assert_eq!(sink.latest().current_operand, "9");
    }

    #[test]
    fn test_typed_expression_renders_result() {
        let (mut engine, mut tui) = setup();
        keys(&mut engine, &mut tui, "2+3*4\n");
        assert_eq!(engine.sink().latest().current_operand, "20");
    }

    #[test]
    fn test_second_function_via_tab() {
        let (mut engine, mut tui) = setup();
        keys(&mut engine, &mut tui, "2\tl");
        assert_eq!(engine.sink().latest().current_operand, "100");
    }

    #[test]
    fn test_memory_store_does_not_repaint() {
        let (mut engine, mut tui) = setup();
        keys(&mut engine, &mut tui, "5");
        engine.sink_mut().take_dirty();

        keys(&mut engine, &mut tui, "S");
        assert!(!engine.sink_mut().take_dirty());
        assert!(!engine.sink().latest().memory_in_use);
        assert_eq!(engine.state().memory, 5.0);

        keys(&mut engine, &mut tui, "R");
        assert!(engine.sink_mut().take_dirty());
        assert!(engine.sink().latest().memory_in_use);
    }

    #[test]
    fn test_divide_by_zero_then_digit() {
        let (mut engine, mut tui) = setup();
        keys(&mut engine, &mut tui, "1/0\n");
        assert_eq!(engine.sink().latest().current_operand, ERROR_TOKEN);
        keys(&mut engine, &mut tui, "7");
        assert_eq!(engine.sink().latest().current_operand, "7");
    }

    #[test]
    fn test_angle_mode_key() {
        let (mut engine, mut tui) = setup();
        keys(&mut engine, &mut tui, "g");
        assert_eq!(engine.sink().latest().angle_mode, AngleMode::Rad);
    }

    #[test]
    fn test_quit_events() {
        let (mut engine, mut tui) = setup();
        assert_eq!(handle_event(&mut engine, &mut tui, TuiEvent::Quit), Flow::Quit);
        assert_eq!(handle_event(&mut engine, &mut tui, TuiEvent::ForceQuit), Flow::Quit);
        assert_eq!(handle_event(&mut engine, &mut tui, TuiEvent::Resize), Flow::Redraw);
    }

    #[test]
    fn test_hover_without_layout_does_not_redraw() {
        let (mut engine, mut tui) = setup();
        assert_eq!(
            handle_event(&mut engine, &mut tui, TuiEvent::MouseMove(3, 3)),
            Flow::Continue
        );
    }
}
