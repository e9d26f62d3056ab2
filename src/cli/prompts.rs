// src/cli/prompts.rs
//! Input parsing for the interactive prompts. Nothing here touches the terminal, so every
//! rule can be checked directly.

use std::fmt;

/// Default and inclusive range for a numeric prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntBounds {
    pub default: usize,
    pub min: usize,
    pub max: usize,
}

impl IntBounds {
    pub fn new(default: usize, min: usize, max: usize) -> Self {
        Self { default, min, max }
    }
}

/// Recoverable problems with numeric input. The caller shows these and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputWarning {
    NotANumber,
    BelowMinimum(usize),
    AboveMaximum(usize),
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputWarning::NotANumber => write!(f, "Invalid integer input; using default."),
            InputWarning::BelowMinimum(min) => write!(f, "Value too small; using min {}.", min),
            InputWarning::AboveMaximum(max) => write!(f, "Value too large; using max {}.", max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInt {
    pub value: usize,
    pub warnings: Vec<InputWarning>,
}

/// Empty input takes the default silently. Anything that is not an integer falls back to
/// the default with a warning. The result is then clamped into `[min, max]`, including
/// integers too long to represent.
pub fn parse_int(input: &str, bounds: IntBounds) -> ParsedInt {
    let mut warnings = Vec::new();
    let trimmed = input.trim();

    let raw: i128 = if trimmed.is_empty() {
        bounds.default as i128
    } else {
        match trimmed.parse::<i128>() {
            Ok(n) => n,
            // Too many digits for i128 is still a number, just an out-of-range one.
            Err(_) if is_integer_literal(trimmed) => {
                if trimmed.starts_with('-') {
                    i128::MIN
                } else {
                    i128::MAX
                }
            }
            Err(_) => {
                warnings.push(InputWarning::NotANumber);
                bounds.default as i128
            }
        }
    };

    let value = if raw < bounds.min as i128 {
        warnings.push(InputWarning::BelowMinimum(bounds.min));
        bounds.min
    } else if raw > bounds.max as i128 {
        warnings.push(InputWarning::AboveMaximum(bounds.max));
        bounds.max
    } else {
        raw as usize
    };

    ParsedInt { value, warnings }
}

fn is_integer_literal(input: &str) -> bool {
    let digits = input
        .strip_prefix('-')
        .or_else(|| input.strip_prefix('+'))
        .unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

const NEGATIVE_TOKENS: [&str; 3] = ["n", "no", "0"];

/// Empty input gives `default`. Only `n`, `no` and `0` (any case) mean no; every other
/// non-empty answer means yes, whatever the default was.
pub fn parse_bool(input: &str, default: bool) -> bool {
    let answer = input.trim().to_lowercase();
    if answer.is_empty() {
        return default;
    }
    !NEGATIVE_TOKENS.contains(&answer.as_str())
}
