//! Binary operators and their evaluation.

use rust_decimal::Decimal;

/// One of the four binary operators on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Evaluate `lhs op rhs`.
    ///
    /// Never fails: division by zero and decimal overflow both produce zero.
    pub fn apply(self, lhs: Decimal, rhs: Decimal) -> Decimal {
        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Divide => {
                if rhs.is_zero() {
                    tracing::debug!(%lhs, "division by zero, falling back to 0");
                    return Decimal::ZERO;
                }
                lhs.checked_div(rhs)
            }
        };

        result.unwrap_or_else(|| {
            tracing::debug!(%lhs, %rhs, op = ?self, "decimal overflow, falling back to 0");
            Decimal::ZERO
        })
    }

    /// Symbol shown on the button and in the pending expression.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}
