use std::fmt;

use bitvec::prelude::*;

use crate::templates::{ForbiddenMask, PositiveTemplate};

/// Candidates are every combination of the six trigger lines.
pub const CANDIDATES: u64 = 64;

/// Bit `i` is set iff candidate `i` satisfies the trigger pattern.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerMask(pub u64);

impl TriggerMask {
    /// Whether `candidate` is selected; false outside `0..64`.
    pub fn matches(&self, candidate: u64) -> bool {
        candidate < CANDIDATES && self.0 & (1_u64 << candidate) != 0
    }

    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Matching candidates in ascending order.
    pub fn candidates(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.view_bits::<Lsb0>().iter_ones().map(|i| i as u64)
    }
}

impl fmt::Debug for TriggerMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}", self.0)
    }
}

/// A candidate matches when every required line is active and every
/// forbidden line is inactive.
pub fn candidate_matches(
    candidate: u64,
    positive: PositiveTemplate,
    forbidden: ForbiddenMask,
) -> bool {
    (candidate & positive.0) == positive.0
        && (!candidate & forbidden.0) == forbidden.0
}

pub fn build(
    positive: PositiveTemplate,
    forbidden: ForbiddenMask,
) -> TriggerMask {
    let mut mask = 0_u64;

    for candidate in 0..CANDIDATES {
        if candidate_matches(candidate, positive, forbidden) {
            mask |= 1_u64 << candidate;
        }
    }

    TriggerMask(mask)
}
