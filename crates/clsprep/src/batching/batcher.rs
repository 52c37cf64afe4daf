//! # `burn` Batcher
//!
//! Lets an [`EncodedDataset`] feed `burn`'s `DataLoaderBuilder`.

use burn::data::dataloader::batcher::Batcher;
use burn::tensor::backend::Backend;

use crate::batching::dataset::EncodedDataset;
use crate::batching::tensors::{ClsBatch, check_records};
use crate::config::ModelFamily;
use crate::encoding::EncodedRecord;
use crate::errors::Result;

/// Stacks [`EncodedRecord`]s into [`ClsBatch`]es for a `burn` data loader.
///
/// `burn` batchers can not fail, so the records are checked once when the
/// batcher is built for a dataset. Batching records from any other source
/// is unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClsBatcher {
    family: ModelFamily,
    width: usize,
}

impl ClsBatcher {
    /// Check `dataset` for `family` and build a batcher for it.
    ///
    /// See [`check_records`] for the errors.
    pub fn for_dataset(
        dataset: &EncodedDataset,
        family: ModelFamily,
    ) -> Result<Self> {
        let width = check_records(dataset.records(), family)?;
        Ok(Self { family, width })
    }

    /// The batch layout family.
    pub fn family(&self) -> ModelFamily {
        self.family
    }

    /// The shared sequence width.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl<B: Backend> Batcher<B, EncodedRecord, ClsBatch<B>> for ClsBatcher {
    fn batch(
        &self,
        items: Vec<EncodedRecord>,
        device: &B::Device,
    ) -> ClsBatch<B> {
        ClsBatch::stack(&items, self.family, self.width, device)
    }
}
