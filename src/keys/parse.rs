//! Key script parsing.
//!
//! Turns a line of typed keys like `5+3+2=` or `1 . . 2` into keypad keys.

use lazy_static::lazy_static;
use regex::Regex;

use super::CalcKey;
use crate::error::{Error, Result};

lazy_static! {
    /// One key per match. `+/-` is tried before `+`, and any other
    /// non-whitespace character is captured so it can be reported.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"\+/-|\S"
    ).unwrap();
}

/// Parse a key script.
///
/// Whitespace between keys is ignored. Fails on the first token that is not
/// a key label or alias.
pub fn parse_keys(script: &str) -> Result<Vec<CalcKey>> {
    KEY_TOKEN
        .find_iter(script)
        .map(|m| {
            let token = m.as_str();
            CalcKey::from_token(token).ok_or_else(|| Error::UnknownKey {
                token: token.to_string(),
                position: m.start(),
            })
        })
        .collect()
}
