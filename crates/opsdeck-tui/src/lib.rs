//! opsdeck-tui - Terminal UI for opsdeck
//!
//! This crate provides the ratatui-based terminal interface: widgets for the
//! tab strip and environment card, the screen layout, terminal event
//! polling, and the event loop that wires operator intent back into the
//! application state.

pub mod actions;
pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
