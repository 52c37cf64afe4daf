use std::io::Write;

use clsprep::vocab::{build_vocab, write_vocab};

use crate::{LogArgs, config_args::ConfigArgs, input_output::OutputArgs};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[clap(flatten)]
    pub config: ConfigArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl VocabArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let config = self.config.load()?;

        log::info!("Building vocab from: {}", config.train_path);
        let vocab = build_vocab(
            &config.train_path,
            config.splitter(),
            config.max_vocab_size,
            config.min_freq,
            &config.special_tokens,
        )?;
        log::info!("Vocab size: {}", vocab.len());

        let path = self.output.output.as_deref().unwrap_or(&config.vocab_path);
        log::info!("output: {path}");

        let mut writer = self.output.open_writer(&config.vocab_path)?;
        write_vocab(&vocab, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}
