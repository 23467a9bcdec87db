//! Calculator core.
//!
//! This module provides:
//! - The keypad-driven state machine with left-to-right operator chaining
//! - Exact decimal evaluation of the four binary operators
//! - Display formatting and parsing
//! - Copying the display to the clipboard

mod clipboard;
mod format;
mod model;
mod operation;
mod readout;

pub use clipboard::copy_to_clipboard;
pub use format::{
    DEFAULT_FRACTION_DIGITS, MAX_FRACTION_DIGITS, MAX_INPUT_DIGITS, format_decimal, parse_display,
};
pub use model::{CalcState, CalculatorModel};
pub use operation::Operation;
pub use readout::Readout;
