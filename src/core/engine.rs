//! # Calculator Engine
//!
//! The finite-state evaluator. One method per user intent; each runs to
//! completion, mutates [`EngineState`], and (where noted) hands a fresh
//! [`Snapshot`] to the render sink.
//!
//! ```text
//!              choose_operation                 compute (ok)
//!   ┌───────┐ ─────────────────► ┌─────────┐ ─────────────────► ┌───────┐
//!   │ Entry │                    │ Pending │                    │ Entry │
//!   └───────┘ ◄───────────────── └─────────┘                    └───────┘
//!       ▲      append after reset     │ non-finite result
//!       │                             ▼
//!       │   clear / next append  ┌─────────┐
//!       └─────────────────────── │  Error  │
//!                                └─────────┘
//! ```
//!
//! Only one binary operation is ever pending. Choosing a second operator
//! evaluates the first before starting the next, so `2 + 3 ×` reads as
//! `5 ×`. There is no precedence.
//!
//! Malformed operands never raise: unary functions and `compute` quietly do
//! nothing, and memory operations read them as 0.

use log::{debug, warn};

use crate::core::format::{format_number, parse_operand};
use crate::core::math::UnaryFn;
use crate::core::state::{AngleMode, ERROR_TOKEN, EngineState, Operation, Snapshot};

/// Receives a snapshot after every rendering operation.
pub trait RenderSink {
    fn render(&mut self, snapshot: &Snapshot);
}

/// Sink that drops every snapshot. Used by the headless front end.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _snapshot: &Snapshot) {}
}

impl<F: FnMut(&Snapshot)> RenderSink for F {
    fn render(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

pub struct Engine<S: RenderSink = NullSink> {
    state: EngineState,
    sink: S,
}

impl<S: RenderSink> Engine<S> {
    pub fn new(sink: S) -> Self {
        Self::with_angle_mode(sink, AngleMode::default())
    }

    pub fn with_angle_mode(sink: S, angle_mode: AngleMode) -> Self {
        Self {
            state: EngineState::new(angle_mode),
            sink,
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn render(&mut self) {
        let snapshot = self.state.snapshot();
        self.sink.render(&snapshot);
    }

    fn enter_error(&mut self) {
        self.state.current_operand = ERROR_TOKEN.to_string();
        self.state.should_reset_screen = true;
        self.render();
    }

    // ── Entry ───────────────────────────────────────────────────────────────

    /// Appends a digit, `.`, parenthesis or constant text to the operand.
    ///
    /// A second `.` is ignored. A lone `"0"` is replaced rather than extended.
    pub fn append(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        if self.state.should_reset_screen {
            self.state.current_operand.clear();
            self.state.should_reset_screen = false;
        }
        if token == "." && self.state.current_operand.contains('.') {
            return;
        }

        if self.state.current_operand == "0" && token != "." {
            self.state.current_operand = token.to_string();
        } else {
            self.state.current_operand.push_str(token);
        }
        self.render();
    }

    pub fn append_pi(&mut self) {
        self.append(&std::f64::consts::PI.to_string());
    }

    pub fn append_e(&mut self) {
        self.append(&std::f64::consts::E.to_string());
    }

    /// Removes the last character; an emptied operand falls back to `"0"`.
    pub fn delete(&mut self) {
        self.state.current_operand.pop();
        if self.state.current_operand.is_empty() {
            self.state.current_operand.push('0');
        }
        self.render();
    }

    /// Resets operands and the pending operation. Memory and modes survive.
    pub fn clear(&mut self) {
        self.state.current_operand = String::from("0");
        self.state.previous_operand.clear();
        self.state.operation = None;
        self.render();
    }

    /// Negates the operand in plain decimal text, since it may still be
    /// edited: no grouping and no rounding. Text with no numeric reading
    /// becomes `"NaN"`.
    pub fn toggle_sign(&mut self) {
        self.state.current_operand = match parse_operand(&self.state.current_operand) {
            Some(value) if value == 0.0 => String::from("0"),
            Some(value) => (-value).to_string(),
            None => String::from("NaN"),
        };
        self.render();
    }

    // ── Binary operations ───────────────────────────────────────────────────

    /// Freezes the operand as the left side of `op`, flushing any operation
    /// already pending.
    pub fn choose_operation(&mut self, op: Operation) {
        if !self.state.previous_operand.is_empty() {
            self.compute();
        }
        self.state.operation = Some(op);
        self.state.previous_operand = self.state.current_operand.clone();
        self.state.should_reset_screen = true;
        self.render();
    }

    /// Applies the pending operation to `(previous, current)`.
    ///
    /// Does nothing when no operation is pending or either operand fails to
    /// parse. A result with no finite value (division by zero included) shows
    /// `"Error"` and leaves the pending operation in place.
    pub fn compute(&mut self) {
        let Some(op) = self.state.operation else {
            return;
        };
        let (Some(previous), Some(current)) = (
            parse_operand(&self.state.previous_operand),
            parse_operand(&self.state.current_operand),
        ) else {
            return;
        };

        match op.apply(previous, current) {
            Some(result) => {
                debug!("compute: {previous} {op:?} {current} = {result}");
                self.state.current_operand = format_number(result);
                self.state.operation = None;
                self.state.previous_operand.clear();
                self.state.should_reset_screen = true;
                self.render();
            }
            None => {
                debug!("compute: {previous} {op:?} {current} has no finite result");
                self.enter_error();
            }
        }
    }

    // ── Functions ───────────────────────────────────────────────────────────

    pub fn apply_unary(&mut self, kind: UnaryFn) {
        let Some(x) = parse_operand(&self.state.current_operand) else {
            return;
        };
        match kind.evaluate(x, self.state.angle_mode) {
            Some(result) => {
                self.state.current_operand = format_number(result);
                self.state.should_reset_screen = true;
                self.render();
            }
            None => {
                debug!("{kind:?}({x}) has no finite result");
                self.enter_error();
            }
        }
    }

    // ── Modes ───────────────────────────────────────────────────────────────

    /// Latches the 2nd key. Which intent a button sends is up to the front end.
    pub fn toggle_second_function(&mut self) {
        self.state.second_function = !self.state.second_function;
        self.render();
    }

    pub fn cycle_angle_mode(&mut self) {
        self.state.angle_mode = self.state.angle_mode.next();
        self.render();
    }

    // ── Memory ──────────────────────────────────────────────────────────────
    //
    // Only recall renders. Clear/add/subtract/store change the register
    // silently and show up on the next rendering operation.

    fn operand_or_zero(&self) -> f64 {
        parse_operand(&self.state.current_operand).unwrap_or(0.0)
    }

    fn set_memory(&mut self, value: f64) {
        if value.is_finite() {
            self.state.memory = value;
        } else {
            warn!("Memory update overflowed, keeping {}", self.state.memory);
        }
    }

    pub fn memory_clear(&mut self) {
        self.state.memory = 0.0;
    }

    pub fn memory_recall(&mut self) {
        self.state.current_operand = format_number(self.state.memory);
        self.state.should_reset_screen = true;
        self.render();
    }

    pub fn memory_add(&mut self) {
        self.set_memory(self.state.memory + self.operand_or_zero());
        self.state.should_reset_screen = true;
    }

    pub fn memory_subtract(&mut self) {
        self.set_memory(self.state.memory - self.operand_or_zero());
        self.state.should_reset_screen = true;
    }

    pub fn memory_store(&mut self) {
        self.set_memory(self.operand_or_zero());
        self.state.should_reset_screen = true;
    }
}

impl Default for Engine<NullSink> {
    fn default() -> Self {
        Self::new(NullSink)
    }
}
