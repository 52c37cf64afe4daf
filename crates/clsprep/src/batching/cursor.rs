//! # Batch Cursor
//!
//! The slice arithmetic behind [`crate::batching::BatchIter`].

use core::ops::Range;

/// Restartable cursor over fixed-size batch ranges.
///
/// Yields ``full_batches`` ranges of ``batch_size``, then one remainder
/// range when ``len % batch_size != 0``, then `None`, after which the
/// cursor rewinds to the first batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCursor {
    len: usize,
    batch_size: usize,
    full_batches: usize,
    has_remainder: bool,
    index: usize,
}

impl BatchCursor {
    /// Create a new cursor.
    ///
    /// ## Panics
    /// If `batch_size` is 0.
    pub fn new(
        len: usize,
        batch_size: usize,
    ) -> Self {
        assert!(batch_size > 0, "batch_size must be > 0");
        let full_batches = len / batch_size;
        Self {
            len,
            batch_size,
            full_batches,
            has_remainder: len % batch_size != 0,
            index: 0,
        }
    }

    /// The number of records covered.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Are there no records?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The configured batch size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// The number of full-size batches.
    pub fn full_batches(&self) -> usize {
        self.full_batches
    }

    /// Is there a final short batch?
    pub fn has_remainder(&self) -> bool {
        self.has_remainder
    }

    /// Batches per epoch.
    pub fn num_batches(&self) -> usize {
        self.full_batches + usize::from(self.has_remainder)
    }

    /// The index of the next batch.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Will [`Self::next_range`] return a range?
    pub fn has_more(&self) -> bool {
        self.index < self.num_batches()
    }

    /// Rewind to the first batch.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// The next batch range; `None` (and rewind) at the end of an epoch.
    pub fn next_range(&mut self) -> Option<Range<usize>> {
        if self.index < self.full_batches {
            let start = self.index * self.batch_size;
            self.index += 1;
            Some(start..start + self.batch_size)
        } else if self.index == self.full_batches && self.has_remainder {
            self.index += 1;
            Some(self.full_batches * self.batch_size..self.len)
        } else {
            self.index = 0;
            None
        }
    }
}
