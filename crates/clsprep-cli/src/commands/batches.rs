use std::time::Instant;

use burn::backend::NdArray;
use clsprep::{
    ModelFamily,
    PipelineConfig,
    batching::{BatchFeatures, ClsBatch},
    encoding::{EncodedRecord, hf::load_hf_tokenizer},
    pipeline::{Splits, build_dataset, build_dataset_subword, build_iterator},
};

use crate::{LogArgs, config_args::ConfigArgs};

type Backend = NdArray;

/// Args for the batches command.
#[derive(clap::Args, Debug)]
pub struct BatchesArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[clap(flatten)]
    pub config: ConfigArgs,

    /// HuggingFace `tokenizer.json`; required for sub-word models.
    #[arg(long, default_value = None)]
    tokenizer: Option<String>,
}

impl BatchesArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let config = self.config.load()?;
        let family = config.model_family();
        log::info!("Model: {} ({family:?})", config.model_name);

        let start = Instant::now();
        let splits = self.load_splits(&config, family)?;
        log::info!("Time usage: {:?}", start.elapsed());

        for (name, records) in [
            ("train", splits.train),
            ("dev", splits.dev),
            ("test", splits.test),
        ] {
            Self::walk_split(&config, name, records)?;
        }

        Ok(())
    }

    fn load_splits(
        &self,
        config: &PipelineConfig,
        family: ModelFamily,
    ) -> Result<Splits, Box<dyn std::error::Error>> {
        if family != ModelFamily::Subword {
            return Ok(build_dataset(config)?.splits);
        }

        let path = self
            .tokenizer
            .as_deref()
            .ok_or_else(|| format!("--tokenizer is required for {}", config.model_name))?;
        log::info!("Loading tokenizer: {path}");
        let tokenizer = load_hf_tokenizer(path)?;

        Ok(build_dataset_subword(config, &tokenizer)?)
    }

    fn walk_split(
        config: &PipelineConfig,
        name: &str,
        records: Vec<EncodedRecord>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if records.is_empty() {
            log::warn!("{name}: empty split");
            return Ok(());
        }

        let num_records = records.len();
        let mut iter = build_iterator::<Backend>(records, config, Default::default())?;
        let num_batches = iter.num_batches();

        let mut seen = 0;
        for (idx, batch) in (&mut iter).enumerate() {
            if idx == 0 {
                log::info!("{name}: first batch {}", describe(&batch));
            }
            seen += batch.batch_size();
        }

        log::info!("{name}: {num_records} records, {num_batches} batches, {seen} rows");
        Ok(())
    }
}

fn describe(batch: &ClsBatch<Backend>) -> String {
    let features = match &batch.features {
        BatchFeatures::None => String::new(),
        BatchFeatures::Ngrams { bigram, trigram } => {
            format!(" bigram={:?} trigram={:?}", bigram.dims(), trigram.dims())
        }
        BatchFeatures::Mask(mask) => format!(" mask={:?}", mask.dims()),
    };
    format!(
        "ids={:?} seq_len={:?} labels={:?}{features}",
        batch.ids.dims(),
        batch.seq_len.dims(),
        batch.labels.dims()
    )
}
