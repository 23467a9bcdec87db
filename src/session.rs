//! Line-oriented calculator session used by the terminal front end.

use crate::calculator::{CalculatorModel, Readout, copy_to_clipboard};
use crate::config::Config;
use crate::error::Result;
use crate::keys::{CalcKey, parse_keys};

/// What a single input line amounted to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Keys were pressed; the readout after the last one.
    Keys(Readout),
    /// Blank line, nothing pressed.
    Empty,
    Help,
    Quit,
}

/// A calculator plus the front-end settings that drive it.
#[derive(Debug)]
pub struct Session {
    calc: CalculatorModel,
    updates: flume::Receiver<String>,
    copy_on_equals: bool,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let mut calc = CalculatorModel::with_fraction_digits(config.fraction_digits());
        let updates = calc.subscribe();
        Self {
            calc,
            updates,
            copy_on_equals: config.copy_on_equals,
        }
    }

    pub fn calculator(&self) -> &CalculatorModel {
        &self.calc
    }

    /// Press every key in `script` and return the final display.
    pub fn run_script(&mut self, script: &str) -> Result<&str> {
        let keys = parse_keys(script)?;
        self.press_all(&keys);
        Ok(self.calc.display())
    }

    /// Handle one line of interactive input.
    ///
    /// Unknown keys reject the whole line before anything is pressed.
    pub fn handle_line(&mut self, line: &str) -> Result<LineOutcome> {
        let line = line.trim();
        match line {
            "" => return Ok(LineOutcome::Empty),
            "q" | "quit" | "exit" => return Ok(LineOutcome::Quit),
            "?" | "help" => return Ok(LineOutcome::Help),
            _ => {}
        }

        let keys = parse_keys(line)?;
        self.press_all(&keys);
        Ok(LineOutcome::Keys(self.calc.readout()))
    }

    fn press_all(&mut self, keys: &[CalcKey]) {
        for &key in keys {
            self.calc.press(key);
            if key == CalcKey::Equals
                && self.copy_on_equals
                && let Err(e) = copy_to_clipboard(self.calc.display())
            {
                tracing::warn!("{e}");
            }
        }

        let updates = self.updates.drain().count();
        tracing::debug!(updates, display = self.calc.display(), "keys applied");
    }
}
