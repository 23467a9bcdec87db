//! Snapshot of what a front end renders for the calculator.

use super::model::CalcState;

/// Display line plus the pending expression above it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readout {
    /// Left operand and operator awaiting a right operand (e.g. `"8 +"`).
    /// Empty when nothing is pending.
    pub expression: String,
    /// The display text.
    pub display: String,
    /// State of the model when the snapshot was taken.
    pub state: CalcState,
}

impl Readout {
    /// Get the text to copy to the clipboard.
    /// The display never carries separators, so it is copied as shown.
    pub fn text_for_clipboard(&self) -> &str {
        &self.display
    }

    /// Render as a single terminal line, right-aligning the display.
    pub fn render_line(&self, width: usize) -> String {
        let expression_width = self.expression.chars().count();
        let display_width = self.display.chars().count();
        let pad = width.saturating_sub(expression_width + display_width).max(1);

        if self.expression.is_empty() {
            format!("{:>width$}", self.display, width = width.max(display_width))
        } else {
            format!("{}{}{}", self.expression, " ".repeat(pad), self.display)
        }
    }
}
