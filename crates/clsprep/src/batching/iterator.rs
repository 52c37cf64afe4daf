//! # Batch Iterator

use burn::tensor::backend::Backend;

use crate::batching::cursor::BatchCursor;
use crate::batching::tensors::{ClsBatch, check_records};
use crate::config::ModelFamily;
use crate::encoding::EncodedRecord;
use crate::errors::{ClsprepError, Result};

/// Restartable iterator over [`ClsBatch`]es of an encoded split.
///
/// Each epoch yields ``len / batch_size`` full batches, then one short
/// batch when there is a remainder, then `None`. After `None` the
/// iterator rewinds; the next call starts a new epoch:
///
/// ```rust,ignore
/// for epoch in 0..epochs {
///     for batch in &mut iter {
///         // ...
///     }
/// }
/// ```
pub struct BatchIter<B: Backend> {
    records: Vec<EncodedRecord>,
    family: ModelFamily,
    width: usize,
    cursor: BatchCursor,
    device: B::Device,
}

impl<B: Backend> BatchIter<B> {
    /// Create a new iterator.
    ///
    /// ## Arguments
    /// * `records` - the encoded split; must be non-empty.
    /// * `batch_size` - records per batch; must be > 0.
    /// * `device` - the device batches are created on.
    /// * `family` - the model family selecting the batch layout.
    ///
    /// ## Errors
    /// [`ClsprepError::InvalidBatchSize`], [`ClsprepError::EmptyDataset`],
    /// or [`ClsprepError::Shape`] if the records can not be stacked.
    pub fn new(
        records: Vec<EncodedRecord>,
        batch_size: usize,
        device: B::Device,
        family: ModelFamily,
    ) -> Result<Self> {
        if batch_size == 0 {
            return Err(ClsprepError::InvalidBatchSize);
        }
        let width = check_records(&records, family)?;
        let cursor = BatchCursor::new(records.len(), batch_size);

        log::debug!(
            "batch iterator: {} records, {} batches of {batch_size}",
            records.len(),
            cursor.num_batches(),
        );

        Ok(Self {
            records,
            family,
            width,
            cursor,
            device,
        })
    }

    /// The underlying records.
    pub fn records(&self) -> &[EncodedRecord] {
        &self.records
    }

    /// The model family.
    pub fn family(&self) -> ModelFamily {
        self.family
    }

    /// The target device.
    pub fn device(&self) -> &B::Device {
        &self.device
    }

    /// The batch cursor.
    pub fn cursor(&self) -> &BatchCursor {
        &self.cursor
    }

    /// Batches per epoch.
    pub fn num_batches(&self) -> usize {
        self.cursor.num_batches()
    }

    /// Does the current epoch have another batch?
    pub fn has_more(&self) -> bool {
        self.cursor.has_more()
    }

    /// Rewind to the first batch.
    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// The next batch's records; `None` (and rewind) at the end of an epoch.
    pub fn next_records(&mut self) -> Option<&[EncodedRecord]> {
        let range = self.cursor.next_range()?;
        Some(&self.records[range])
    }

    /// The next batch; `None` (and rewind) at the end of an epoch.
    pub fn next_batch(&mut self) -> Option<ClsBatch<B>> {
        let range = self.cursor.next_range()?;
        Some(ClsBatch::stack(
            &self.records[range],
            self.family,
            self.width,
            &self.device,
        ))
    }

    /// Consume the iterator, returning the records.
    pub fn into_records(self) -> Vec<EncodedRecord> {
        self.records
    }
}

impl<B: Backend> Iterator for BatchIter<B> {
    type Item = ClsBatch<B>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_batch()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_batches() - self.cursor.position();
        (remaining, Some(remaining))
    }
}
