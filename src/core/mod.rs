//! # Core Calculator Logic
//!
//! This module contains the calculator itself.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • EngineState          │
//!                    │  • Action (intents)     │
//!                    │  • Engine (evaluator)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Snapshot
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Script    │      │   Tests    │
//!     │  Adapter   │      │ (--eval)   │      │ (recorder) │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `EngineState` and the `Snapshot` handed to renderers
//! - [`engine`]: the evaluator and the `RenderSink` seam
//! - [`action`]: the `Action` enum and `update()`
//! - [`math`]: operator and function kernels
//! - [`format`]: number ↔ operand text
//! - [`script`]: headless key sequences
//! - [`config`]: start-up settings

pub mod action;
pub mod config;
pub mod engine;
pub mod format;
pub mod math;
pub mod script;
pub mod state;
