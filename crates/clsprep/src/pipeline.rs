//! # Dataset Pipeline
//!
//! End-to-end flows from a [`PipelineConfig`] to encoded train/dev/test
//! splits and batch iterators.

use std::{path::Path, sync::Arc};

use burn::data::dataloader::{DataLoader, DataLoaderBuilder};
use burn::tensor::backend::Backend;

use crate::batching::{BatchIter, ClsBatch, ClsBatcher, EncodedDataset};
use crate::config::{ModelFamily, PipelineConfig};
use crate::encoding::{
    EncodedRecord,
    LineEncoder,
    SubwordEncoder,
    SubwordTokenizer,
    encode_dataset,
    encode_dataset_subword,
};
use crate::errors::{ClsprepError, Result};
use crate::vocab::{Vocabulary, build_vocab, load_vocab_path, save_vocab_path};

/// Encoded train/dev/test splits.
#[derive(Debug, Clone, PartialEq)]
pub struct Splits {
    /// The train split.
    pub train: Vec<EncodedRecord>,

    /// The dev split.
    pub dev: Vec<EncodedRecord>,

    /// The test split.
    pub test: Vec<EncodedRecord>,
}

/// Vocabulary-encoded splits.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDataset {
    /// The vocabulary used to encode the splits.
    pub vocab: Vocabulary,

    /// The encoded splits.
    pub splits: Splits,
}

fn encode_splits<F>(
    config: &PipelineConfig,
    mut encode: F,
) -> Result<Splits>
where
    F: FnMut(&Path) -> Result<Vec<EncodedRecord>>,
{
    Ok(Splits {
        train: encode(Path::new(&config.train_path))?,
        dev: encode(Path::new(&config.dev_path))?,
        test: encode(Path::new(&config.test_path))?,
    })
}

/// Load the cached vocabulary, or build it from the train split and cache it.
pub fn load_or_build_vocab(config: &PipelineConfig) -> Result<Vocabulary> {
    let vocab_path = Path::new(&config.vocab_path);
    let vocab = if vocab_path.exists() {
        log::debug!("loading cached vocab: {}", vocab_path.display());
        load_vocab_path(vocab_path, &config.special_tokens)?
    } else {
        let vocab = build_vocab(
            &config.train_path,
            config.splitter(),
            config.max_vocab_size,
            config.min_freq,
            &config.special_tokens,
        )?;
        save_vocab_path(&vocab, vocab_path)?;
        log::debug!("saved vocab: {}", vocab_path.display());
        vocab
    };

    log::info!("Vocab size: {}", vocab.len());
    Ok(vocab)
}

/// Build the vocabulary and encode train/dev/test.
///
/// Hashed n-gram features are added for [`ModelFamily::HashedNgram`].
///
/// ## Errors
/// [`ClsprepError::Config`] for sub-word model families; see
/// [`build_dataset_subword`].
pub fn build_dataset(config: &PipelineConfig) -> Result<SplitDataset> {
    config.validate()?;
    if config.model_family() == ModelFamily::Subword {
        return Err(ClsprepError::Config(format!(
            "{} uses sub-word encoding",
            config.model_name
        )));
    }

    let vocab = load_or_build_vocab(config)?;
    let encoder = LineEncoder::new(&vocab, config.splitter(), config.pad_size)
        .with_ngram_buckets(config.ngram_buckets());

    let splits = encode_splits(config, |path| encode_dataset(path, &encoder))?;

    Ok(SplitDataset { vocab, splits })
}

/// Encode train/dev/test with a sub-word tokenizer.
///
/// ## Errors
/// [`ClsprepError::Config`] for model families other than
/// [`ModelFamily::Subword`].
pub fn build_dataset_subword<T: SubwordTokenizer>(
    config: &PipelineConfig,
    tokenizer: &T,
) -> Result<Splits> {
    config.validate()?;
    if config.model_family() != ModelFamily::Subword {
        return Err(ClsprepError::Config(format!(
            "{} does not use sub-word encoding",
            config.model_name
        )));
    }

    let encoder = SubwordEncoder::new(
        tokenizer,
        config.special_tokens.cls.clone(),
        config.pad_size,
    );

    encode_splits(config, |path| encode_dataset_subword(path, &encoder))
}

/// Build a [`BatchIter`] over a split with the configured batch size and family.
pub fn build_iterator<B: Backend>(
    records: Vec<EncodedRecord>,
    config: &PipelineConfig,
    device: B::Device,
) -> Result<BatchIter<B>> {
    BatchIter::new(records, config.batch_size, device, config.model_family())
}

/// Build a `burn` data loader over a split with the configured batch size
/// and family.
///
/// Unlike [`build_iterator`], the loader can shuffle (`shuffle_seed`) and
/// batch on worker threads through `burn`.
pub fn build_data_loader<B: Backend>(
    records: Vec<EncodedRecord>,
    config: &PipelineConfig,
    device: B::Device,
    shuffle_seed: Option<u64>,
) -> Result<Arc<dyn DataLoader<B, ClsBatch<B>>>> {
    if config.batch_size == 0 {
        return Err(ClsprepError::InvalidBatchSize);
    }
    let dataset = EncodedDataset::new(records);
    let batcher = ClsBatcher::for_dataset(&dataset, config.model_family())?;

    let mut builder = DataLoaderBuilder::<B, EncodedRecord, ClsBatch<B>>::new(batcher)
        .batch_size(config.batch_size)
        .set_device(device);
    if let Some(seed) = shuffle_seed {
        builder = builder.shuffle(seed);
    }
    Ok(builder.build(dataset))
}
