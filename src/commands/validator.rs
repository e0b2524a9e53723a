//! Argument coercion and validation against a command's definitions.

use super::definitions::{ArgDef, ArgType};
use crate::error::{Result, StockroomError};

/// A coerced argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Text(String),
    Number(i64),
}

/// Outcome of validating one argument definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgOutcome {
    /// The raw token coerced to the declared type.
    Valid { name: &'static str, value: ArgValue },
    /// The argument is missing or has the wrong type.
    Invalid { reason: String },
}

/// Per-argument outcomes for a whole command.
///
/// Optional arguments that were not supplied have no outcome at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub all_valid: bool,
    pub results: Vec<ArgOutcome>,
}

impl Validation {
    /// Reduces the outcomes into named arguments, or a single validation error
    /// listing every failing argument.
    pub fn into_arguments(self) -> Result<Arguments> {
        if !self.all_valid {
            let reasons = self
                .results
                .into_iter()
                .filter_map(|outcome| match outcome {
                    ArgOutcome::Invalid { reason } => Some(reason),
                    ArgOutcome::Valid { .. } => None,
                })
                .collect();
            return Err(StockroomError::validation(reasons));
        }

        let values = self
            .results
            .into_iter()
            .filter_map(|outcome| match outcome {
                ArgOutcome::Valid { name, value } => Some((name, value)),
                ArgOutcome::Invalid { .. } => None,
            })
            .collect();

        Ok(Arguments { values })
    }
}

/// Validated arguments keyed by definition name, in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    values: Vec<(&'static str, ArgValue)>,
}

impl Arguments {
    /// Returns the value recorded under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Returns a text argument.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            ArgValue::Text(s) => Some(s),
            ArgValue::Number(_) => None,
        }
    }

    /// Returns a numeric argument.
    pub fn number(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            ArgValue::Number(n) => Some(*n),
            ArgValue::Text(_) => None,
        }
    }

    /// Returns a required text argument, failing if validation let it through absent.
    pub fn require_text(&self, name: &str) -> Result<String> {
        self.text(name)
            .map(str::to_string)
            .ok_or_else(|| StockroomError::internal(format!("argument [{name}] was not validated")))
    }

    /// Returns a required numeric argument.
    pub fn require_number(&self, name: &str) -> Result<i64> {
        self.number(name)
            .ok_or_else(|| StockroomError::internal(format!("argument [{name}] was not validated")))
    }

    /// Number of arguments supplied, optional ones included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when the command took no arguments.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Walks the argument definitions in order, coercing the raw token at each position.
pub fn validate(raw: &[String], defs: &[ArgDef]) -> Validation {
    let mut all_valid = true;
    let mut results = Vec::with_capacity(defs.len());

    for (i, def) in defs.iter().enumerate() {
        match raw.get(i) {
            Some(token) => match coerce(token, def.arg_type) {
                Some(value) => results.push(ArgOutcome::Valid {
                    name: def.name,
                    value,
                }),
                None => {
                    all_valid = false;
                    results.push(ArgOutcome::Invalid {
                        reason: format!(
                            "Expected a {} for [{}]",
                            def.arg_type.display_name(),
                            def.name
                        ),
                    });
                }
            },
            None if def.required => {
                all_valid = false;
                results.push(ArgOutcome::Invalid {
                    reason: format!("Missing required argument: [{}]", def.name),
                });
            }
            None => {}
        }
    }

    Validation { all_valid, results }
}

/// Coerces a raw token to the declared type. Strings always succeed.
fn coerce(token: &str, arg_type: ArgType) -> Option<ArgValue> {
    match arg_type {
        ArgType::String => Some(ArgValue::Text(token.to_string())),
        ArgType::Number => parse_integer_prefix(token).map(ArgValue::Number),
    }
}

/// Parses a leading integer: optional whitespace, optional sign, then digits.
///
/// Trailing characters after the digits are ignored (`"42abc"` is 42). No
/// digits, or a value outside `i64`, is not a number.
fn parse_integer_prefix(token: &str) -> Option<i64> {
    let s = token.trim_start();
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
