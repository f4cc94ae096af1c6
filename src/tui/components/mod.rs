//! # TUI Components
//!
//! UI components for the terminal calculator.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive everything they draw as struct fields:
//! - `TitleBar`: mode indicators (angle mode, 2nd, memory)
//! - `Display`: pending operation and current operand
//!
//! ### Stateful Components
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it
//! for one frame:
//! - `KeypadState` / `Keypad`: button grid, hitboxes, hover
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── title_bar.rs  (top status line)
//! ├── display.rs    (operand readout)
//! └── keypad.rs     (button grid and second-function table)
//! ```

mod display;
pub mod keypad;
mod title_bar;

pub use display::Display;
pub use keypad::{Keypad, KeypadState};
pub use title_bar::TitleBar;
