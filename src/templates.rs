use crate::pattern::TriggerPattern;

/// Lines that must be active: bit `i` is set iff symbol `i` is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveTemplate(pub u64);

/// Lines that must be inactive: the 64-bit complement of the negative
/// template, whose bit `i` is set iff symbol `i` is not `0`.
///
/// Bits 6..64 are always set. Candidates never reach those bits, so they
/// do not affect matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForbiddenMask(pub u64);

/// Reads a binary string with the first character as the least
/// significant bit.
pub fn binary_str_to_u64(s: &str) -> u64 {
    s.chars()
        .enumerate()
        .fold(0, |acc, (i, c)| acc | (bit_value(c) << i))
}

fn bit_value(c: char) -> u64 {
    match c {
        '0' => 0,
        '1' => 1,
        _ => unreachable!("non-binary character {c:?} in filled pattern"),
    }
}

pub fn split(pattern: &TriggerPattern) -> (PositiveTemplate, ForbiddenMask) {
    let positive = binary_str_to_u64(&pattern.fill_dont_care('0'));
    let negative = binary_str_to_u64(&pattern.fill_dont_care('1'));

    (PositiveTemplate(positive), ForbiddenMask(!negative))
}
