//! Keypad calculator with exact decimal arithmetic.
//!
//! [`CalculatorModel`] is the state machine behind a calculator button grid:
//! digit entry, left-to-right operator chaining and result formatting. Front
//! ends feed it [`CalcKey`]s and render [`CalculatorModel::display`].

pub mod calculator;
pub mod config;
pub mod error;
pub mod keys;
pub mod logging;
pub mod session;

pub use calculator::{CalcState, CalculatorModel, Operation, Readout};
pub use config::Config;
pub use error::{Error, Result};
pub use keys::{BUTTON_ROWS, CalcKey, KeyKind, parse_keys};
pub use session::{LineOutcome, Session};
