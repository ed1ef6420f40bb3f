//! Packed record of "last sibling" states from the root down to an entry.

use std::fmt;

use crate::error::{Result, TreeError};

/// Maximum traversal depth, and the capacity of an [`EndStateHistory`].
pub const MAX_DEPTH: usize = 32;

/// Per-depth end states for one tree entry.
///
/// Index 0 holds the state of the shallowest ancestor (a direct child of the
/// walk root); index `len() - 1` holds the entry's own state. A `true` state
/// means the node at that depth was the last of its parent's visible,
/// sorted children.
///
/// The value is `Copy`: every entry yielded by a walk owns its own snapshot
/// and siblings never share mutable history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EndStateHistory {
    bits: u32,
    len: usize,
}

impl EndStateHistory {
    /// An empty history (the walk root).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from explicit states, shallowest first.
    pub fn from_states(states: &[bool]) -> Result<Self> {
        if states.len() > MAX_DEPTH {
            return Err(TreeError::DepthExceeded { max: MAX_DEPTH });
        }
        let bits = states
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, &state)| acc | (u32::from(state) << i));
        Ok(Self {
            bits,
            len: states.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// State at `index`.
    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.bits & (1 << index) != 0)
    }

    /// Overwrite the state at `index`.
    pub fn set(&mut self, index: usize, state: bool) -> Result<()> {
        self.check_index(index)?;
        if state {
            self.bits |= 1 << index;
        } else {
            self.bits &= !(1 << index);
        }
        Ok(())
    }

    /// Push a new deepest state.
    pub fn append(&mut self, state: bool) -> Result<()> {
        if self.len == MAX_DEPTH {
            return Err(TreeError::DepthExceeded { max: MAX_DEPTH });
        }
        if state {
            self.bits |= 1 << self.len;
        }
        self.len += 1;
        Ok(())
    }

    /// Append all of `other`'s states after this history's own.
    ///
    /// Nothing is modified when the combined length would exceed
    /// [`MAX_DEPTH`].
    pub fn extend(&mut self, other: &EndStateHistory) -> Result<()> {
        if self.len + other.len > MAX_DEPTH {
            return Err(TreeError::DepthExceeded { max: MAX_DEPTH });
        }
        // Bits above `len` are always clear, so a shifted OR is enough.
        self.bits |= other.bits.checked_shl(self.len as u32).unwrap_or(0);
        self.len += other.len;
        Ok(())
    }

    /// A copy of this history with one more state appended.
    pub fn child(&self, is_last: bool) -> Result<Self> {
        let mut next = *self;
        next.append(is_last)?;
        Ok(next)
    }

    /// The deepest state, i.e. whether the entry itself is a last sibling.
    pub fn is_last(&self) -> Option<bool> {
        self.len.checked_sub(1).map(|i| self.bits & (1 << i) != 0)
    }

    /// Iterate states from shallowest to deepest.
    pub fn iter(&self) -> Iter {
        Iter {
            bits: self.bits,
            index: 0,
            len: self.len,
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(TreeError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl TryFrom<&[bool]> for EndStateHistory {
    type Error = TreeError;

    fn try_from(states: &[bool]) -> Result<Self> {
        Self::from_states(states)
    }
}

impl<'a> IntoIterator for &'a EndStateHistory {
    type Item = bool;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Renders as a root-to-leaf string of `0`/`1` digits.
impl fmt::Display for EndStateHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in self {
            f.write_str(if state { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Iterator over the states of an [`EndStateHistory`].
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u32,
    index: usize,
    len: usize,
}

impl Iterator for Iter {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.index >= self.len {
            return None;
        }
        let state = self.bits & (1 << self.index) != 0;
        self.index += 1;
        Some(state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter {}
