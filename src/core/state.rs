//! # Engine State
//!
//! Everything the calculator knows lives in one struct. The engine owns it and
//! is the only thing that mutates it; the front ends only ever see a
//! [`Snapshot`].
//!
//! ```text
//! EngineState
//! ├── current_operand: String        // operand being edited, or "Error"
//! ├── previous_operand: String       // frozen left operand ("" when idle)
//! ├── operation: Option<Operation>   // pending binary operator
//! ├── memory: f64                    // memory register, never NaN
//! ├── second_function: bool          // 2nd key latched (presentation only)
//! ├── angle_mode: AngleMode          // DEG / RAD for forward trig
//! └── should_reset_screen: bool      // next append replaces the operand
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel shown in place of an operand when a computation has no finite result.
pub const ERROR_TOKEN: &str = "Error";

/// Binary operators that wait for a right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Root,
    Mod,
}

impl Operation {
    /// Symbol shown on the pending-operation line.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "−",
            Operation::Mul => "×",
            Operation::Div => "÷",
            Operation::Pow => "^",
            Operation::Root => "ʸ√x",
            Operation::Mod => "mod",
        }
    }
}

/// Unit convention for the forward trig functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Deg,
    Rad,
}

impl AngleMode {
    /// Two-element cycle: DEG → RAD → DEG.
    pub fn next(self) -> Self {
        match self {
            AngleMode::Deg => AngleMode::Rad,
            AngleMode::Rad => AngleMode::Deg,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AngleMode::Deg => "DEG",
            AngleMode::Rad => "RAD",
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    pub current_operand: String,
    pub previous_operand: String,
    pub operation: Option<Operation>,
    pub memory: f64,
    pub second_function: bool,
    pub angle_mode: AngleMode,
    pub should_reset_screen: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new(AngleMode::default())
    }
}

impl EngineState {
    pub fn new(angle_mode: AngleMode) -> Self {
        Self {
            current_operand: String::from("0"),
            previous_operand: String::new(),
            operation: None,
            memory: 0.0,
            second_function: false,
            angle_mode,
            should_reset_screen: false,
        }
    }

    pub fn is_error(&self) -> bool {
        self.current_operand == ERROR_TOKEN
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_operand: self.current_operand.clone(),
            previous_operand: self.previous_operand.clone(),
            operation: self.operation,
            angle_mode: self.angle_mode,
            second_function: self.second_function,
            memory_in_use: self.memory != 0.0,
        }
    }
}

/// Read-only view handed to the renderer after a state change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub current_operand: String,
    pub previous_operand: String,
    pub operation: Option<Operation>,
    pub angle_mode: AngleMode,
    pub second_function: bool,
    pub memory_in_use: bool,
}

impl Snapshot {
    /// `"{previous} {symbol}"` while an operation is pending, empty otherwise.
    pub fn pending_line(&self) -> String {
        match self.operation {
            Some(op) => format!("{} {}", self.previous_operand, op.symbol()),
            None => String::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.current_operand == ERROR_TOKEN
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        EngineState::default().snapshot()
    }
}
