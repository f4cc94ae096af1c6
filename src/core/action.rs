//! # Actions
//!
//! Everything the user can ask the calculator to do becomes an `Action`.
//! Pressing "7"? That's `Action::Append("7")`. Pressing "sin" with 2nd
//! latched? The front end sends `Action::Unary(UnaryFn::Asin)`.
//!
//! The `update()` function takes the engine and an action and runs the
//! matching engine operation. No I/O here; rendering goes through the
//! engine's sink.
//!
//! ```text
//! Engine + Action  →  update()  →  Engine (+ Snapshot to the sink)
//! ```
//!
//! The match is exhaustive, so a new intent cannot be added without deciding
//! what the engine does with it.

use log::debug;

use crate::core::engine::{Engine, RenderSink};
use crate::core::math::UnaryFn;
use crate::core::state::Operation;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Digit, `.`, `(` or `)`.
    Append(String),
    AppendPi,
    AppendE,
    ChooseOperation(Operation),
    Compute,
    Unary(UnaryFn),
    ToggleSecondFunction,
    CycleAngleMode,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
    MemoryStore,
    Delete,
    Clear,
    ToggleSign,
}

impl Action {
    pub fn digit(c: char) -> Self {
        Action::Append(c.to_string())
    }
}

pub fn update<S: RenderSink>(engine: &mut Engine<S>, action: Action) {
    debug!("Dispatching {:?}", action);
    match action {
        Action::Append(token) => engine.append(&token),
        Action::AppendPi => engine.append_pi(),
        Action::AppendE => engine.append_e(),
        Action::ChooseOperation(op) => engine.choose_operation(op),
        Action::Compute => engine.compute(),
        Action::Unary(kind) => engine.apply_unary(kind),
        Action::ToggleSecondFunction => engine.toggle_second_function(),
        Action::CycleAngleMode => engine.cycle_angle_mode(),
        Action::MemoryClear => engine.memory_clear(),
        Action::MemoryRecall => engine.memory_recall(),
        Action::MemoryAdd => engine.memory_add(),
        Action::MemorySubtract => engine.memory_subtract(),
        Action::MemoryStore => engine.memory_store(),
        Action::Delete => engine.delete(),
        Action::Clear => engine.clear(),
        Action::ToggleSign => engine.toggle_sign(),
    }
}
