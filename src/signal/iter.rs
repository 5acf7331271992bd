//! Cursor over a snapshot sequence.

use super::sequence::SnapshotSequence;
use crate::error::Result;
use crate::snapshot::Snapshot;
use std::iter::FusedIterator;

/// Independent traversal over a [`SnapshotSequence`].
///
/// Yields `get_snapshot(t)` for `t` in `0..snapshot_count`, in order. The
/// cursor owns its position, so several cursors over one sequence never
/// disturb each other. Once exhausted it keeps returning `None` until
/// [`reset`](Self::reset) is called or a new cursor is requested with
/// [`SnapshotSequence::iter`].
#[derive(Debug, Clone)]
pub struct SnapshotIter<'a> {
    sequence: &'a SnapshotSequence,

    /// Next index yielded from the front
    front: usize,

    /// One past the next index yielded from the back
    back: usize,
}

impl<'a> SnapshotIter<'a> {
    pub(crate) fn new(sequence: &'a SnapshotSequence) -> Self {
        Self {
            sequence,
            front: 0,
            back: sequence.snapshot_count(),
        }
    }

    /// Index of the next snapshot from the front.
    #[inline]
    pub fn position(&self) -> usize {
        self.front
    }

    /// Snapshots not yet yielded.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.back - self.front
    }

    /// Rewind to the first snapshot.
    pub fn reset(&mut self) {
        self.front = 0;
        self.back = self.sequence.snapshot_count();
    }
}

impl Iterator for SnapshotIter<'_> {
    type Item = Result<Snapshot>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let snapshot = self.sequence.get_snapshot(self.front);
        self.front += 1;
        Some(snapshot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for SnapshotIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.sequence.get_snapshot(self.back))
    }
}

impl ExactSizeIterator for SnapshotIter<'_> {}

impl FusedIterator for SnapshotIter<'_> {}
