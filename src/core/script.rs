//! # Key Scripts
//!
//! A headless way to press buttons: a whitespace-separated list of tokens,
//! each naming one button (numbers expand to one press per character).
//!
//! ```text
//! 2 + 3 * 4 =          →  20   (left to right, no precedence)
//! 90 sin               →  1    (degrees by default)
//! 42 ms clear mr       →  42
//! ```
//!
//! Used by `scical --eval` and by the integration tests.

use std::fmt;

use crate::core::action::{Action, update};
use crate::core::engine::{Engine, RenderSink};
use crate::core::math::UnaryFn;
use crate::core::state::Operation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    UnknownToken { token: String, position: usize },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownToken { token, position } => {
                write!(f, "unknown key '{token}' at token {position}")
            }
        }
    }
}

impl std::error::Error for ScriptError {}

/// Translates a script into the actions it presses, in order.
pub fn parse(source: &str) -> Result<Vec<Action>, ScriptError> {
    let mut actions = Vec::new();
    for (position, token) in source.split_whitespace().enumerate() {
        if is_number_like(token) {
            actions.extend(token.chars().map(Action::digit));
            continue;
        }
        let action = keyword(token).ok_or_else(|| ScriptError::UnknownToken {
            token: token.to_string(),
            position: position + 1,
        })?;
        actions.push(action);
    }
    Ok(actions)
}

/// Parses and presses every key of `source` on `engine`.
///
/// Nothing is pressed if the script contains an unknown token.
pub fn run<S: RenderSink>(engine: &mut Engine<S>, source: &str) -> Result<(), ScriptError> {
    for action in parse(source)? {
        update(engine, action);
    }
    Ok(())
}

fn is_number_like(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn keyword(token: &str) -> Option<Action> {
    let action = match token.to_ascii_lowercase().as_str() {
        "." => Action::Append(String::from(".")),
        "(" => Action::Append(String::from("(")),
        ")" => Action::Append(String::from(")")),

        "+" => Action::ChooseOperation(Operation::Add),
        "-" | "−" => Action::ChooseOperation(Operation::Sub),
        "*" | "×" | "x" => Action::ChooseOperation(Operation::Mul),
        "/" | "÷" => Action::ChooseOperation(Operation::Div),
        "^" | "pow" => Action::ChooseOperation(Operation::Pow),
        "root" => Action::ChooseOperation(Operation::Root),
        "mod" => Action::ChooseOperation(Operation::Mod),
        "=" => Action::Compute,

        "sin" => Action::Unary(UnaryFn::Sin),
        "cos" => Action::Unary(UnaryFn::Cos),
        "tan" => Action::Unary(UnaryFn::Tan),
        "asin" => Action::Unary(UnaryFn::Asin),
        "acos" => Action::Unary(UnaryFn::Acos),
        "atan" => Action::Unary(UnaryFn::Atan),
        "sqrt" => Action::Unary(UnaryFn::Sqrt),
        "sq" => Action::Unary(UnaryFn::Square),
        "cube" => Action::Unary(UnaryFn::Cube),
        "log" => Action::Unary(UnaryFn::Log10),
        "pow10" => Action::Unary(UnaryFn::Pow10),
        "ln" => Action::Unary(UnaryFn::Ln),
        "exp" => Action::Unary(UnaryFn::Exp),
        "inv" => Action::Unary(UnaryFn::Reciprocal),
        "abs" => Action::Unary(UnaryFn::Abs),
        "fact" | "!" => Action::Unary(UnaryFn::Factorial),
        "pct" | "%" => Action::Unary(UnaryFn::Percentage),

        "pi" | "π" => Action::AppendPi,
        "e" => Action::AppendE,

        "mc" => Action::MemoryClear,
        "mr" => Action::MemoryRecall,
        "m+" => Action::MemoryAdd,
        "m-" => Action::MemorySubtract,
        "ms" => Action::MemoryStore,

        "del" => Action::Delete,
        "clear" | "ac" => Action::Clear,
        "neg" => Action::ToggleSign,
        "2nd" => Action::ToggleSecondFunction,
        "angle" => Action::CycleAngleMode,
        _ => return None,
    };
    Some(action)
}
