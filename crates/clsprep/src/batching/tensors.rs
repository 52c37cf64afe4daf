//! # Batch Tensors

use burn::tensor::{Int, Tensor, TensorData, backend::Backend};

use crate::config::ModelFamily;
use crate::encoding::EncodedRecord;
use crate::errors::{ClsprepError, Result};
use crate::types::TokenId;

/// Family-specific batch inputs.
#[derive(Debug, Clone)]
pub enum BatchFeatures<B: Backend> {
    /// No extra inputs.
    None,

    /// Hashed n-gram ids.
    Ngrams {
        /// Bigram bucket ids; `[batch, pad_size]`.
        bigram: Tensor<B, 2, Int>,

        /// Trigram bucket ids; `[batch, pad_size]`.
        trigram: Tensor<B, 2, Int>,
    },

    /// Attention mask; `[batch, pad_size]`.
    Mask(Tensor<B, 2, Int>),
}

/// A batch of encoded records, stacked into tensors.
#[derive(Debug, Clone)]
pub struct ClsBatch<B: Backend> {
    /// Token ids; `[batch, pad_size]`.
    pub ids: Tensor<B, 2, Int>,

    /// Pre-padding lengths; `[batch]`.
    pub seq_len: Tensor<B, 1, Int>,

    /// Family-specific inputs.
    pub features: BatchFeatures<B>,

    /// Class labels; `[batch]`.
    pub labels: Tensor<B, 1, Int>,
}

/// Check that records can be stacked for `family`.
///
/// ## Returns
/// The shared sequence width.
///
/// ## Errors
/// [`ClsprepError::EmptyDataset`] for no records;
/// [`ClsprepError::Shape`] for ragged sequences or features that do not
/// match `family`.
pub fn check_records(
    records: &[EncodedRecord],
    family: ModelFamily,
) -> Result<usize> {
    let first = records.first().ok_or(ClsprepError::EmptyDataset)?;
    let width = first.ids.len();

    for (idx, record) in records.iter().enumerate() {
        if record.ids.len() != width {
            return Err(ClsprepError::Shape(format!(
                "record {idx} has {} ids; expected {width}",
                record.ids.len()
            )));
        }
        if record.features.family() != family {
            return Err(ClsprepError::Shape(format!(
                "record {idx} has {:?} features; expected {family:?}",
                record.features.family()
            )));
        }
        let feature_widths = match (record.ngrams(), record.mask()) {
            (Some((bigram, trigram)), _) => vec![bigram.len(), trigram.len()],
            (_, Some(mask)) => vec![mask.len()],
            _ => Vec::new(),
        };
        if feature_widths.iter().any(|&w| w != width) {
            return Err(ClsprepError::Shape(format!(
                "record {idx} has feature widths {feature_widths:?}; expected {width}"
            )));
        }
    }

    Ok(width)
}

fn stack_rows<'a, B, I>(
    rows: I,
    count: usize,
    width: usize,
    device: &B::Device,
) -> Tensor<B, 2, Int>
where
    B: Backend,
    I: Iterator<Item = &'a [TokenId]>,
{
    let flat: Vec<i64> = rows.flat_map(|row| row.iter().map(|&t| t as i64)).collect();
    Tensor::from_data(TensorData::new(flat, [count, width]), device)
}

fn stack_values<B: Backend>(
    values: Vec<i64>,
    device: &B::Device,
) -> Tensor<B, 1, Int> {
    let count = values.len();
    Tensor::from_data(TensorData::new(values, [count]), device)
}

impl<B: Backend> ClsBatch<B> {
    /// Stack records into a batch on `device`.
    ///
    /// See [`check_records`] for the errors.
    pub fn from_records(
        records: &[EncodedRecord],
        family: ModelFamily,
        device: &B::Device,
    ) -> Result<Self> {
        let width = check_records(records, family)?;
        Ok(Self::stack(records, family, width, device))
    }

    /// Stack pre-checked records.
    pub(crate) fn stack(
        records: &[EncodedRecord],
        family: ModelFamily,
        width: usize,
        device: &B::Device,
    ) -> Self {
        let count = records.len();

        let ids = stack_rows::<B, _>(records.iter().map(|r| r.ids.as_slice()), count, width, device);
        let seq_len = stack_values::<B>(records.iter().map(|r| r.seq_len as i64).collect(), device);
        let labels = stack_values::<B>(records.iter().map(|r| r.label).collect(), device);

        let features = match family {
            ModelFamily::Generic => BatchFeatures::None,
            ModelFamily::HashedNgram => BatchFeatures::Ngrams {
                bigram: stack_rows::<B, _>(
                    records.iter().filter_map(|r| r.ngrams()).map(|(b, _)| b),
                    count,
                    width,
                    device,
                ),
                trigram: stack_rows::<B, _>(
                    records.iter().filter_map(|r| r.ngrams()).map(|(_, t)| t),
                    count,
                    width,
                    device,
                ),
            },
            ModelFamily::Subword => BatchFeatures::Mask(stack_rows::<B, _>(
                records.iter().filter_map(|r| r.mask()),
                count,
                width,
                device,
            )),
        };

        Self {
            ids,
            seq_len,
            features,
            labels,
        }
    }

    /// The number of records in the batch.
    pub fn batch_size(&self) -> usize {
        self.labels.dims()[0]
    }
}
