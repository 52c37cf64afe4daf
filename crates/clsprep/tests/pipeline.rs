#![allow(missing_docs)]

use std::path::Path;

use burn::backend::NdArray;
use clsprep::{
    ClsprepError,
    ModelFamily,
    PipelineConfig,
    batching::{BatchFeatures, ClsBatch},
    encoding::SubwordTokenizer,
    pipeline::{
        build_data_loader,
        build_dataset,
        build_dataset_subword,
        build_iterator,
        load_or_build_vocab,
    },
    types::TokenId,
    vocab::load_vocab_path,
};
use tempdir::TempDir;

type B = NdArray;

const TRAIN: &str = "\
the cat sat\t0
a dog ran home\t1

the dog sat on the mat\t0
cats and dogs\t1
the end\t0
";

const DEV: &str = "the cat ran\t1\nunseen words here\t0\n";

const TEST: &str = "dog\t1\n";

fn write_corpus(dir: &Path) -> anyhow::Result<PipelineConfig> {
    let path = |name: &str| dir.join(name).to_string_lossy().to_string();

    std::fs::write(dir.join("train.txt"), TRAIN)?;
    std::fs::write(dir.join("dev.txt"), DEV)?;
    std::fs::write(dir.join("test.txt"), TEST)?;

    Ok(PipelineConfig::new(
        path("train.txt"),
        path("dev.txt"),
        path("test.txt"),
        path("vocab.txt"),
    )
    .with_use_word(true)
    .with_pad_size(4)
    .with_batch_size(2))
}

fn ints<const D: usize>(tensor: burn::tensor::Tensor<B, D, burn::tensor::Int>) -> Vec<i64> {
    tensor.into_data().convert::<i64>().to_vec::<i64>().unwrap()
}

#[test]
fn test_vocab_is_cached() -> anyhow::Result<()> {
    let tmpdir = TempDir::new("clsprep-pipeline")?;
    let config = write_corpus(tmpdir.path())?;

    assert!(!Path::new(&config.vocab_path).exists());
    let built = load_or_build_vocab(&config)?;
    assert!(Path::new(&config.vocab_path).exists());

    let cached = load_vocab_path(&config.vocab_path, &config.special_tokens)?;
    assert_eq!(cached, built);

    // The cache wins over the corpus.
    std::fs::write(&config.train_path, "zebra\t0\n")?;
    assert_eq!(load_or_build_vocab(&config)?, built);

    // Vocab invariants.
    let n = built.len() as TokenId;
    assert_eq!(built.unk_id(), n - 2);
    assert_eq!(built.pad_id(), n - 1);
    let mut ids: Vec<TokenId> = built.iter().map(|(_, id)| id).collect();
    ids.sort();
    assert_eq!(ids, (0..n).collect::<Vec<_>>());
    assert_eq!(built.get("the"), Some(0));

    Ok(())
}

#[test]
fn test_generic_pipeline() -> anyhow::Result<()> {
    let tmpdir = TempDir::new("clsprep-pipeline")?;
    let config = write_corpus(tmpdir.path())?;

    let dataset = build_dataset(&config)?;
    let vocab = &dataset.vocab;
    assert_eq!(dataset.splits.train.len(), 5);
    assert_eq!(dataset.splits.dev.len(), 2);
    assert_eq!(dataset.splits.test.len(), 1);

    for record in dataset
        .splits
        .train
        .iter()
        .chain(&dataset.splits.dev)
        .chain(&dataset.splits.test)
    {
        assert_eq!(record.ids.len(), 4);
        assert!(record.seq_len <= 4);
    }

    let unseen = &dataset.splits.dev[1];
    assert_eq!(
        unseen.ids,
        vec![vocab.unk_id(), vocab.unk_id(), vocab.unk_id(), vocab.pad_id()]
    );

    // Encoding is deterministic.
    assert_eq!(build_dataset(&config)?, dataset);

    let mut iter = build_iterator::<B>(dataset.splits.train, &config, Default::default())?;
    assert_eq!(iter.num_batches(), 3);

    let batches: Vec<ClsBatch<B>> = (&mut iter).collect();
    assert_eq!(
        batches.iter().map(|b| b.batch_size()).collect::<Vec<_>>(),
        vec![2, 2, 1]
    );
    for batch in &batches {
        assert_eq!(batch.ids.dims()[1], 4);
        assert!(matches!(batch.features, BatchFeatures::None));
    }

    let labels: Vec<i64> = batches.into_iter().flat_map(|b| ints(b.labels)).collect();
    assert_eq!(labels, vec![0, 1, 0, 1, 0]);

    // The iterator restarts for the next epoch.
    assert_eq!((&mut iter).count(), 3);

    Ok(())
}

#[test]
fn test_hashed_ngram_pipeline() -> anyhow::Result<()> {
    let tmpdir = TempDir::new("clsprep-pipeline")?;
    let config = write_corpus(tmpdir.path())?
        .with_model_name("FastText".to_string())
        .with_n_gram_vocab(97);

    let dataset = build_dataset(&config)?;
    let record = &dataset.splits.train[0];
    let (bigram, trigram) = record.ngrams().unwrap();
    assert_eq!(bigram.len(), 4);
    assert_eq!(trigram.len(), 4);
    assert!(bigram.iter().chain(trigram).all(|&h| h < 97));

    let mut iter = build_iterator::<B>(dataset.splits.dev, &config, Default::default())?;
    let batch = iter.next().unwrap();
    match batch.features {
        BatchFeatures::Ngrams { bigram, trigram } => {
            assert_eq!(bigram.dims(), [2, 4]);
            assert_eq!(trigram.dims(), [2, 4]);
        }
        other => panic!("unexpected features: {other:?}"),
    }
    assert!(iter.next().is_none());

    Ok(())
}

#[test]
fn test_data_loader_pipeline() -> anyhow::Result<()> {
    let tmpdir = TempDir::new("clsprep-pipeline")?;
    let config = write_corpus(tmpdir.path())?
        .with_model_name("FastText".to_string())
        .with_n_gram_vocab(97);

    let dataset = build_dataset(&config)?;
    let expected: Vec<i64> = dataset.splits.train.iter().map(|r| r.label).collect();

    let loader = build_data_loader::<B>(dataset.splits.train, &config, Default::default(), None)?;
    assert_eq!(loader.num_items(), 5);

    let batches: Vec<ClsBatch<B>> = loader.iter().collect();
    assert_eq!(
        batches.iter().map(|b| b.batch_size()).collect::<Vec<_>>(),
        vec![2, 2, 1]
    );
    for batch in &batches {
        assert_eq!(batch.ids.dims()[1], 4);
        assert!(matches!(batch.features, BatchFeatures::Ngrams { .. }));
    }
    let labels: Vec<i64> = batches.into_iter().flat_map(|b| ints(b.labels)).collect();
    assert_eq!(labels, expected);

    // Shuffled loaders see every record once per epoch.
    let shuffled = build_data_loader::<B>(dataset.splits.dev, &config, Default::default(), Some(7))?;
    let rows: usize = shuffled.iter().map(|b| b.batch_size()).sum();
    assert_eq!(rows, 2);

    assert!(matches!(
        build_data_loader::<B>(Vec::new(), &config, Default::default(), None),
        Err(ClsprepError::EmptyDataset)
    ));

    Ok(())
}

#[test]
fn test_malformed_split_fails() -> anyhow::Result<()> {
    let tmpdir = TempDir::new("clsprep-pipeline")?;
    let config = write_corpus(tmpdir.path())?;
    std::fs::write(&config.test_path, "dog\t1\ncat\tpositive\n")?;

    match build_dataset(&config) {
        Err(ClsprepError::Format { path, line, .. }) => {
            assert_eq!(path, config.test_path);
            assert_eq!(line, 2);
        }
        other => panic!("unexpected result: {other:?}"),
    }
    Ok(())
}

#[test]
fn test_invalid_config() -> anyhow::Result<()> {
    let tmpdir = TempDir::new("clsprep-pipeline")?;
    let config = write_corpus(tmpdir.path())?;

    assert!(matches!(
        build_dataset(&config.clone().with_batch_size(0)),
        Err(ClsprepError::Config(_))
    ));
    assert!(matches!(
        build_dataset(&config.with_model_name("bert".to_string())),
        Err(ClsprepError::Config(_))
    ));
    Ok(())
}

/// Whitespace tokenizer that ids tokens by length; `[CLS]` is 100.
struct LengthTokenizer;

impl SubwordTokenizer for LengthTokenizer {
    fn tokenize(
        &self,
        text: &str,
    ) -> clsprep::Result<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }

    fn convert_tokens_to_ids(
        &self,
        tokens: &[String],
    ) -> clsprep::Result<Vec<TokenId>> {
        Ok(tokens
            .iter()
            .map(|t| if t == "[CLS]" { 100 } else { t.len() as TokenId })
            .collect())
    }
}

#[test]
fn test_subword_pipeline() -> anyhow::Result<()> {
    let tmpdir = TempDir::new("clsprep-pipeline")?;
    let config = write_corpus(tmpdir.path())?.with_model_name("bert".to_string());
    assert_eq!(config.model_family(), ModelFamily::Subword);

    let splits = build_dataset_subword(&config, &LengthTokenizer)?;
    assert_eq!(splits.train[0].ids, vec![100, 3, 3, 3]);
    assert_eq!(splits.train[0].mask(), Some(&[1, 1, 1, 1][..]));

    // "the dog sat on the mat" + [CLS]: truncated ids, unclamped seq_len.
    assert_eq!(splits.train[2].ids, vec![100, 3, 3, 3]);
    assert_eq!(splits.train[2].seq_len, 7);

    assert_eq!(splits.test[0].ids, vec![100, 3, 0, 0]);
    assert_eq!(splits.test[0].mask(), Some(&[1, 1, 0, 0][..]));

    let mut iter = build_iterator::<B>(splits.train, &config, Default::default())?;
    let batch = iter.next().unwrap();
    match batch.features {
        BatchFeatures::Mask(mask) => assert_eq!(mask.dims(), [2, 4]),
        other => panic!("unexpected features: {other:?}"),
    }
    assert_eq!(ints(batch.seq_len), vec![4, 5]);

    // Vocabulary encoding is rejected for sub-word families, and vice versa.
    assert!(build_dataset(&config).is_err());
    let generic = config.with_model_name("TextCNN".to_string());
    assert!(build_dataset_subword(&generic, &LengthTokenizer).is_err());

    Ok(())
}
