//! Keypad keys and the fixed button grid.

mod parse;

pub use parse::parse_keys;

use crate::calculator::Operation;

const DIGIT_TITLES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A button on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalcKey {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Decimal,
    /// A binary operator
    Op(Operation),
    Equals,
    Clear,
    /// Sign toggle (±)
    PlusMinus,
    Percent,
}

/// Visual grouping of keys, used by front ends for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    /// Digits and the decimal point
    Digit,
    /// Binary operators and equals
    Operator,
    /// Clear, sign toggle and percent
    Function,
}

/// The keypad, top row first. Zero spans two columns.
pub const BUTTON_ROWS: [&[CalcKey]; 5] = [
    &[
        CalcKey::Clear,
        CalcKey::PlusMinus,
        CalcKey::Percent,
        CalcKey::Op(Operation::Divide),
    ],
    &[
        CalcKey::Digit(7),
        CalcKey::Digit(8),
        CalcKey::Digit(9),
        CalcKey::Op(Operation::Multiply),
    ],
    &[
        CalcKey::Digit(4),
        CalcKey::Digit(5),
        CalcKey::Digit(6),
        CalcKey::Op(Operation::Subtract),
    ],
    &[
        CalcKey::Digit(1),
        CalcKey::Digit(2),
        CalcKey::Digit(3),
        CalcKey::Op(Operation::Add),
    ],
    &[CalcKey::Digit(0), CalcKey::Decimal, CalcKey::Equals],
];

impl CalcKey {
    /// Get the button label.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_TITLES.get(*d as usize).copied().unwrap_or("?"),
            Self::Decimal => ".",
            Self::Op(op) => op.symbol(),
            Self::Equals => "=",
            Self::Clear => "C",
            Self::PlusMinus => "±",
            Self::Percent => "%",
        }
    }

    pub fn kind(&self) -> KeyKind {
        match self {
            Self::Op(_) | Self::Equals => KeyKind::Operator,
            Self::Clear | Self::PlusMinus | Self::Percent => KeyKind::Function,
            Self::Digit(_) | Self::Decimal => KeyKind::Digit,
        }
    }

    /// Number of grid columns this button occupies.
    pub fn column_span(&self) -> usize {
        match self {
            Self::Digit(0) => 2,
            _ => 1,
        }
    }

    /// Look up a key by its label or a keyboard-friendly alias.
    pub fn from_token(token: &str) -> Option<Self> {
        let key = match token {
            "." | "," => Self::Decimal,
            "+" => Self::Op(Operation::Add),
            "-" | "−" => Self::Op(Operation::Subtract),
            "*" | "×" | "x" | "X" => Self::Op(Operation::Multiply),
            "/" | "÷" => Self::Op(Operation::Divide),
            "=" => Self::Equals,
            "c" | "C" => Self::Clear,
            "±" | "+/-" | "n" | "N" => Self::PlusMinus,
            "%" => Self::Percent,
            _ => {
                let mut chars = token.chars();
                let digit = chars.next()?.to_digit(10)?;
                if chars.next().is_some() {
                    return None;
                }
                Self::Digit(digit as u8)
            }
        };
        Some(key)
    }
}

/// Render the keypad as fixed-width text rows.
pub fn render_grid(cell_width: usize) -> Vec<String> {
    BUTTON_ROWS
        .iter()
        .map(|row| {
            row.iter()
                .map(|key| {
                    let span = key.column_span();
                    let width = cell_width * span + (span - 1);
                    format!("[{:^width$}]", key.title(), width = width.saturating_sub(2))
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
