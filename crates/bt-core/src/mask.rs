//! `AgentMask` — a fixed-width bitset of agent ids.
//!
//! Bit `i` set means `AgentId(i)` is a member.  The mask is `Copy + Hash +
//! Ord`, which is what lets [`StateKey`](crate::StateKey) act as a cheap
//! visited-set key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::AgentId;

/// Maximum number of agents a mask (and therefore an `AgentSet`) can hold.
pub const MAX_AGENTS: usize = u64::BITS as usize;

/// Set of agent ids backed by a single `u64`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct AgentMask(u64);

impl AgentMask {
    pub const EMPTY: AgentMask = AgentMask(0);

    /// Mask containing ids `0..count`.
    ///
    /// `count` is clamped to [`MAX_AGENTS`].
    pub fn first(count: usize) -> Self {
        match count {
            0 => Self::EMPTY,
            n if n >= MAX_AGENTS => AgentMask(u64::MAX),
            n => AgentMask((1u64 << n) - 1),
        }
    }

    /// Mask with exactly one member.
    #[inline]
    pub fn single(id: AgentId) -> Self {
        AgentMask(1u64 << id.0)
    }

    /// Mask with exactly the two given members (one if `a == b`).
    #[inline]
    pub fn pair(a: AgentId, b: AgentId) -> Self {
        Self::single(a).union(Self::single(b))
    }

    /// Raw bit pattern.
    #[inline]
    pub fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn contains(self, id: AgentId) -> bool {
        self.0 & (1u64 << id.0) != 0
    }

    #[inline]
    pub fn insert(&mut self, id: AgentId) {
        self.0 |= 1u64 << id.0;
    }

    #[inline]
    pub fn remove(&mut self, id: AgentId) {
        self.0 &= !(1u64 << id.0);
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn union(self, other: AgentMask) -> AgentMask {
        AgentMask(self.0 | other.0)
    }

    #[inline]
    pub fn intersection(self, other: AgentMask) -> AgentMask {
        AgentMask(self.0 & other.0)
    }

    #[inline]
    pub fn difference(self, other: AgentMask) -> AgentMask {
        AgentMask(self.0 & !other.0)
    }

    /// `true` if every member of `self` is also in `other`.
    #[inline]
    pub fn is_subset(self, other: AgentMask) -> bool {
        self.0 & !other.0 == 0
    }

    /// Members in ascending id order.
    pub fn iter(self) -> MaskIter {
        MaskIter(self.0)
    }
}

impl FromIterator<AgentId> for AgentMask {
    fn from_iter<I: IntoIterator<Item = AgentId>>(iter: I) -> Self {
        let mut mask = AgentMask::EMPTY;
        for id in iter {
            mask.insert(id);
        }
        mask
    }
}

impl IntoIterator for AgentMask {
    type Item = AgentId;
    type IntoIter = MaskIter;

    fn into_iter(self) -> MaskIter {
        self.iter()
    }
}

impl fmt::Debug for AgentMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|id| id.0)).finish()
    }
}

/// Ascending iterator over the members of an [`AgentMask`].
#[derive(Clone, Debug)]
pub struct MaskIter(u64);

impl Iterator for MaskIter {
    type Item = AgentId;

    #[inline]
    fn next(&mut self) -> Option<AgentId> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros();
        // Clear the lowest set bit.
        self.0 &= self.0 - 1;
        Some(AgentId(bit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for MaskIter {}
