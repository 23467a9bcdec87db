//! The calculator state machine.
//!
//! Keystrokes mutate the model, which keeps the display text, the value it
//! represents, and an optional pending `stored op current` evaluation.
//! Operators chain strictly left to right: `5 + 3 +` shows `8` before the
//! next operand is typed.

use rust_decimal::Decimal;

use super::format::{DEFAULT_FRACTION_DIGITS, MAX_INPUT_DIGITS, format_decimal, parse_display};
use super::operation::Operation;
use super::readout::Readout;
use crate::keys::CalcKey;

/// Coarse state of the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcState {
    /// Freshly created or cleared; display is `"0"`.
    Idle,
    /// Keystrokes are composing a new number.
    Typing,
    /// Showing the result of `=` or of a chained operator.
    ResultShown,
}

/// Calculator driven by keypad actions.
///
/// Every action is total and returns the new display text. Observers
/// registered with [`CalculatorModel::subscribe`] receive the same text.
#[derive(Debug)]
pub struct CalculatorModel {
    display: String,
    current: Decimal,
    stored: Option<Decimal>,
    operation: Option<Operation>,
    state: CalcState,
    has_decimal: bool,
    fraction_digits: u32,
    subscribers: Vec<flume::Sender<String>>,
}

impl Default for CalculatorModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorModel {
    pub fn new() -> Self {
        Self::with_fraction_digits(DEFAULT_FRACTION_DIGITS)
    }

    /// Create a model that formats results with at most `fraction_digits`
    /// fractional digits.
    pub fn with_fraction_digits(fraction_digits: u32) -> Self {
        Self {
            display: "0".to_string(),
            current: Decimal::ZERO,
            stored: None,
            operation: None,
            state: CalcState::Idle,
            has_decimal: false,
            fraction_digits,
            subscribers: Vec::new(),
        }
    }

    /// The text to render.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn state(&self) -> CalcState {
        self.state
    }

    pub fn is_typing(&self) -> bool {
        self.state == CalcState::Typing
    }

    /// The value the display represents.
    pub fn current_value(&self) -> Decimal {
        self.current
    }

    /// The left operand and operator waiting for a right operand.
    pub fn pending(&self) -> Option<(Decimal, Operation)> {
        self.stored.zip(self.operation)
    }

    /// Snapshot of everything a front end renders.
    pub fn readout(&self) -> Readout {
        let expression = match self.pending() {
            Some((stored, op)) => {
                let left = format_decimal(stored, self.fraction_digits);
                format!("{} {}", left, op.symbol())
            }
            None => String::new(),
        };

        Readout {
            expression,
            display: self.display.clone(),
            state: self.state,
        }
    }

    /// Register an observer that receives the display after every action.
    pub fn subscribe(&mut self) -> flume::Receiver<String> {
        let (tx, rx) = flume::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Dispatch a single keypad key.
    pub fn press(&mut self, key: CalcKey) -> &str {
        tracing::debug!(key = key.title(), "key pressed");
        match key {
            CalcKey::Digit(d) => self.append_digit(d),
            CalcKey::Decimal => self.append_decimal(),
            CalcKey::Op(op) => self.choose_operation(op),
            CalcKey::Equals => self.calculate(),
            CalcKey::Clear => self.clear(),
            CalcKey::PlusMinus => self.toggle_sign(),
            CalcKey::Percent => self.percent(),
        }
    }

    pub fn append_digit(&mut self, digit: u8) -> &str {
        if digit > 9 {
            tracing::debug!(digit, "ignoring out-of-range digit");
            return self.publish();
        }

        if !self.is_typing() {
            self.start_number(String::new());
        }

        if self.display == "0" {
            if digit == 0 {
                return self.publish();
            }
            self.display.clear();
        }

        let typed_digits = self.display.chars().filter(char::is_ascii_digit).count();
        if typed_digits >= MAX_INPUT_DIGITS {
            tracing::debug!(digit, "input is full, ignoring digit");
            return self.publish();
        }

        self.display.push(char::from(b'0' + digit));
        self.commit_typed();
        self.publish()
    }

    pub fn append_decimal(&mut self) -> &str {
        if !self.is_typing() {
            self.start_number("0".to_string());
        }

        if !self.has_decimal {
            self.display.push('.');
            self.has_decimal = true;
        }

        self.publish()
    }

    pub fn choose_operation(&mut self, op: Operation) -> &str {
        if self.is_typing() {
            self.commit_typed();
        }

        let left = match self.pending() {
            Some((stored, pending)) => pending.apply(stored, self.current),
            None => self.current,
        };

        self.state = CalcState::ResultShown;
        self.show(left);
        self.stored = Some(left);
        self.operation = Some(op);
        self.publish()
    }

    pub fn calculate(&mut self) -> &str {
        let Some((stored, op)) = self.pending() else {
            return self.publish();
        };

        self.commit_typed();
        let result = op.apply(stored, self.current);

        self.stored = None;
        self.operation = None;
        self.state = CalcState::ResultShown;
        self.show(result);
        self.publish()
    }

    pub fn clear(&mut self) -> &str {
        self.display = "0".to_string();
        self.current = Decimal::ZERO;
        self.stored = None;
        self.operation = None;
        self.state = CalcState::Idle;
        self.has_decimal = false;
        self.publish()
    }

    pub fn toggle_sign(&mut self) -> &str {
        self.commit_typed();
        self.show(-self.current);
        self.publish()
    }

    pub fn percent(&mut self) -> &str {
        self.commit_typed();
        self.show(Operation::Divide.apply(self.current, Decimal::ONE_HUNDRED));
        self.publish()
    }

    fn start_number(&mut self, seed: String) {
        self.display = seed;
        self.state = CalcState::Typing;
        self.has_decimal = false;
    }

    fn commit_typed(&mut self) {
        self.current = parse_display(&self.display);
    }

    /// Format `value` onto the display; the current value becomes exactly
    /// what is shown.
    fn show(&mut self, value: Decimal) {
        self.display = format_decimal(value, self.fraction_digits);
        self.current = parse_display(&self.display);
        self.has_decimal = self.is_typing() && self.display.contains('.');
    }

    fn publish(&mut self) -> &str {
        let display = &self.display;
        self.subscribers.retain(|tx| tx.send(display.clone()).is_ok());
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn typed(digits: &str) -> CalculatorModel {
        let mut calc = CalculatorModel::new();
        for c in digits.chars() {
            match c {
                '.' => calc.append_decimal(),
                d => calc.append_digit(d.to_digit(10).unwrap() as u8),
            };
        }
        calc
    }

    #[test]
    fn test_initial_state() {
        let calc = CalculatorModel::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.state(), CalcState::Idle);
        assert_eq!(calc.pending(), None);
        assert_eq!(calc.current_value(), Decimal::ZERO);
    }

    #[test]
    fn test_digit_entry() {
        let calc = typed("1234");
        assert_eq!(calc.display(), "1234");
        assert_eq!(calc.current_value(), dec("1234"));
        assert!(calc.is_typing());
    }

    #[test]
    fn test_leading_zero_suppressed() {
        assert_eq!(typed("0").display(), "0");
        assert_eq!(typed("000").display(), "0");
        assert_eq!(typed("007").display(), "7");
    }

    #[test]
    fn test_zero_after_digits_kept() {
        assert_eq!(typed("100").display(), "100");
        assert_eq!(typed("0.05").display(), "0.05");
    }

    #[test]
    fn test_out_of_range_digit_ignored() {
        let mut calc = typed("4");
        let rx = calc.subscribe();
        assert_eq!(calc.append_digit(12), "4");
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec!["4"]);
    }

    #[test]
    fn test_digit_entry_stops_at_input_limit() {
        let digits = "1234567890".repeat(3);
        let calc = typed(&digits);

        assert_eq!(calc.display(), &digits[..MAX_INPUT_DIGITS]);
        assert_eq!(calc.current_value(), dec(&digits[..MAX_INPUT_DIGITS]));
    }

    #[test]
    fn test_full_input_still_evaluates() {
        let mut calc = typed(&"1234567890".repeat(3));
        calc.choose_operation(Operation::Subtract);
        calc.append_digit(1);
        assert_eq!(calc.calculate(), "1234567890123456789012345677");
    }

    #[test]
    fn test_fractional_input_limit() {
        let calc = typed(&format!("0.{}", "5".repeat(40)));
        let expected = format!("0.{}", "5".repeat(MAX_INPUT_DIGITS - 1));
        assert_eq!(calc.display(), expected);
        assert_eq!(calc.current_value(), dec(&expected));
    }

    #[test]
    fn test_decimal_seeds_zero() {
        let mut calc = CalculatorModel::new();
        assert_eq!(calc.append_decimal(), "0.");
        assert_eq!(calc.append_digit(5), "0.5");
        assert_eq!(calc.current_value(), dec("0.5"));
    }

    #[test]
    fn test_second_decimal_ignored() {
        assert_eq!(typed("1..2").display(), "1.2");
        assert_eq!(typed("1.2.3").display(), "1.23");
    }

    #[test]
    fn test_decimal_after_result_starts_new_number() {
        let mut calc = typed("7");
        calc.choose_operation(Operation::Add);
        assert_eq!(calc.append_decimal(), "0.");
        calc.append_digit(5);
        assert_eq!(calc.calculate(), "7.5");
    }

    #[test]
    fn test_choose_operation_shows_left_operand() {
        let mut calc = typed("5");
        assert_eq!(calc.choose_operation(Operation::Add), "5");
        assert_eq!(calc.state(), CalcState::ResultShown);
        assert_eq!(calc.pending(), Some((dec("5"), Operation::Add)));
    }

    #[test]
    fn test_chaining_left_to_right() {
        let mut calc = typed("5");
        calc.choose_operation(Operation::Add);
        calc.append_digit(3);
        assert_eq!(calc.choose_operation(Operation::Add), "8");
        calc.append_digit(2);
        assert_eq!(calc.calculate(), "10");
        assert_eq!(calc.pending(), None);
    }

    #[test]
    fn test_no_precedence() {
        // 2 + 3 × 4 = 20, not 14
        let mut calc = typed("2");
        calc.choose_operation(Operation::Add);
        calc.append_digit(3);
        calc.choose_operation(Operation::Multiply);
        calc.append_digit(4);
        assert_eq!(calc.calculate(), "20");
    }

    #[test]
    fn test_divide_by_zero_shows_zero() {
        let mut calc = typed("5");
        calc.choose_operation(Operation::Divide);
        calc.append_digit(0);
        assert_eq!(calc.calculate(), "0");
    }

    #[test]
    fn test_calculate_without_pending_is_noop() {
        let mut calc = typed("42");
        assert_eq!(calc.calculate(), "42");
        assert!(calc.is_typing());
    }

    #[test]
    fn test_calculate_result_is_current_value() {
        let mut calc = typed("6");
        calc.choose_operation(Operation::Multiply);
        calc.append_digit(7);
        calc.calculate();
        assert_eq!(calc.current_value(), dec("42"));
        assert_eq!(calc.state(), CalcState::ResultShown);

        // The result can seed the next operation
        calc.choose_operation(Operation::Subtract);
        calc.append_digit(2);
        assert_eq!(calc.calculate(), "40");
    }

    #[test]
    fn test_digit_after_result_starts_new_number() {
        let mut calc = typed("2");
        calc.choose_operation(Operation::Add);
        calc.append_digit(2);
        calc.calculate();
        assert_eq!(calc.append_digit(9), "9");
    }

    #[test]
    fn test_chained_operand_keeps_full_precision() {
        let mut calc = typed("1");
        calc.choose_operation(Operation::Divide);
        calc.append_digit(3);
        assert_eq!(calc.choose_operation(Operation::Multiply), "0.3333333333");

        let (stored, _) = calc.pending().unwrap();
        assert_eq!(stored, Operation::Divide.apply(Decimal::ONE, dec("3")));

        calc.append_digit(3);
        assert_eq!(calc.calculate(), "1");
    }

    #[test]
    fn test_result_capped_at_ten_fraction_digits() {
        let mut calc = typed("1");
        calc.choose_operation(Operation::Divide);
        calc.append_digit(3);
        assert_eq!(calc.calculate(), "0.3333333333");
    }

    #[test]
    fn test_custom_fraction_digits() {
        let mut calc = CalculatorModel::with_fraction_digits(3);
        calc.append_digit(2);
        calc.choose_operation(Operation::Divide);
        calc.append_digit(3);
        assert_eq!(calc.calculate(), "0.667");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut calc = typed("9.5");
        calc.choose_operation(Operation::Multiply);
        calc.append_digit(3);
        assert_eq!(calc.clear(), "0");
        assert_eq!(calc.state(), CalcState::Idle);
        assert_eq!(calc.pending(), None);
        assert_eq!(calc.current_value(), Decimal::ZERO);

        // A cleared decimal flag allows a new point
        assert_eq!(calc.append_decimal(), "0.");
    }

    #[test]
    fn test_toggle_sign_twice_restores_display() {
        let mut calc = typed("12.5");
        assert_eq!(calc.toggle_sign(), "-12.5");
        assert_eq!(calc.toggle_sign(), "12.5");
    }

    #[test]
    fn test_toggle_sign_of_zero() {
        let mut calc = CalculatorModel::new();
        assert_eq!(calc.toggle_sign(), "0");
        assert_eq!(calc.state(), CalcState::Idle);
    }

    #[test]
    fn test_toggle_sign_keeps_typing() {
        let mut calc = typed("5");
        calc.toggle_sign();
        assert!(calc.is_typing());
        assert_eq!(calc.append_digit(6), "-56");
    }

    #[test]
    fn test_toggle_sign_keeps_pending_operation() {
        let mut calc = typed("10");
        calc.choose_operation(Operation::Subtract);
        calc.append_digit(4);
        calc.toggle_sign();
        assert_eq!(calc.calculate(), "14");
    }

    #[test]
    fn test_percent() {
        assert_eq!(typed("50").percent(), "0.5");
        assert_eq!(CalculatorModel::new().percent(), "0");
    }

    #[test]
    fn test_percent_resyncs_decimal_flag() {
        let mut calc = typed("50");
        calc.percent();
        // "0.5" already has a point, so another one is ignored
        assert_eq!(calc.append_decimal(), "0.5");
        assert_eq!(calc.append_digit(7), "0.57");
    }

    #[test]
    fn test_readout_expression() {
        let mut calc = typed("8");
        assert_eq!(calc.readout().expression, "");
        calc.choose_operation(Operation::Divide);
        calc.append_digit(2);

        let readout = calc.readout();
        assert_eq!(readout.expression, "8 ÷");
        assert_eq!(readout.display, "2");
        assert_eq!(readout.state, CalcState::Typing);
    }

    #[test]
    fn test_press_dispatch() {
        let mut calc = CalculatorModel::new();
        for key in [
            CalcKey::Digit(4),
            CalcKey::Op(Operation::Multiply),
            CalcKey::Digit(2),
            CalcKey::Decimal,
            CalcKey::Digit(5),
            CalcKey::Equals,
        ] {
            calc.press(key);
        }
        assert_eq!(calc.display(), "10");

        assert_eq!(calc.press(CalcKey::PlusMinus), "-10");
        assert_eq!(calc.press(CalcKey::Percent), "-0.1");
        assert_eq!(calc.press(CalcKey::Clear), "0");
    }

    #[test]
    fn test_subscribers_receive_every_update() {
        let mut calc = CalculatorModel::new();
        let rx = calc.subscribe();

        calc.append_digit(3);
        calc.choose_operation(Operation::Add);
        calc.append_digit(4);
        calc.calculate();

        let seen: Vec<String> = rx.try_iter().collect();
        assert_eq!(seen, vec!["3", "3", "4", "7"]);
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut calc = CalculatorModel::new();
        let rx = calc.subscribe();
        drop(rx);
        calc.append_digit(1);
        assert!(calc.subscribers.is_empty());
    }
}
