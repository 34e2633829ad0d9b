use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::InputError;

/// Number of hardware trigger lines described by a pattern.
pub const TRIGGER_LINES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// `1`: the line must be active.
    Required,
    /// `0`: the line must be inactive.
    Forbidden,
    /// `X`: either state is accepted.
    DontCare,
}

impl Symbol {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Symbol::Required),
            '0' => Some(Symbol::Forbidden),
            'X' => Some(Symbol::DontCare),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Required => '1',
            Symbol::Forbidden => '0',
            Symbol::DontCare => 'X',
        }
    }
}

/// A validated trigger configuration such as `XX1110`.
///
/// Symbol `i` describes trigger line `i`, which is bit `i` of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerPattern(pub [Symbol; TRIGGER_LINES]);

impl TriggerPattern {
    /// Symbols in line order, line 0 first.
    pub fn symbols(&self) -> &[Symbol; TRIGGER_LINES] {
        &self.0
    }

    /// Renders the pattern as a binary string with every `X` replaced by
    /// `fill`.
    pub fn fill_dont_care(&self, fill: char) -> String {
        self.0
            .iter()
            .map(|symbol| match symbol {
                Symbol::DontCare => fill,
                other => other.as_char(),
            })
            .collect()
    }

    /// Number of `X` symbols; the pattern selects `2^n` candidates.
    pub fn dont_care_count(&self) -> usize {
        self.0.iter().filter(|&&s| s == Symbol::DontCare).count()
    }
}

/// Parses a trigger configuration, checking its length before its
/// characters.
///
/// Length is counted in `char`s rather than bytes, so a six-character input
/// containing a non-ASCII character is a `Character` error.
pub fn validate(input: &str) -> Result<TriggerPattern, InputError> {
    let len = input.chars().count();
    if len != TRIGGER_LINES {
        return Err(InputError::Length { len });
    }

    let mut symbols = [Symbol::DontCare; TRIGGER_LINES];
    for (position, (slot, found)) in
        symbols.iter_mut().zip(input.chars()).enumerate()
    {
        *slot = Symbol::from_char(found)
            .ok_or(InputError::Character { position, found })?;
    }

    Ok(TriggerPattern(symbols))
}

impl FromStr for TriggerPattern {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl fmt::Display for TriggerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.0 {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}

impl Serialize for TriggerPattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
