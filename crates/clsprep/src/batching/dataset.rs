//! # `burn` Dataset Adapter

use burn::data::dataset::Dataset;

use crate::encoding::EncodedRecord;

/// An encoded split as a `burn` [`Dataset`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodedDataset {
    records: Vec<EncodedRecord>,
}

impl From<Vec<EncodedRecord>> for EncodedDataset {
    fn from(records: Vec<EncodedRecord>) -> Self {
        Self::new(records)
    }
}

impl EncodedDataset {
    /// Wrap encoded records.
    pub fn new(records: Vec<EncodedRecord>) -> Self {
        Self { records }
    }

    /// The records.
    pub fn records(&self) -> &[EncodedRecord] {
        &self.records
    }

    /// Release the records.
    pub fn into_records(self) -> Vec<EncodedRecord> {
        self.records
    }
}

impl Dataset<EncodedRecord> for EncodedDataset {
    fn get(
        &self,
        index: usize,
    ) -> Option<EncodedRecord> {
        self.records.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::RecordFeatures;

    #[test]
    fn test_dataset() {
        let record = EncodedRecord {
            ids: vec![1, 2],
            label: 3,
            seq_len: 2,
            features: RecordFeatures::None,
        };
        let dataset: EncodedDataset = vec![record.clone()].into();

        assert_eq!(dataset.len(), 1);
        assert!(!dataset.is_empty());
        assert_eq!(dataset.get(0), Some(record));
        assert_eq!(dataset.get(1), None);
    }
}
