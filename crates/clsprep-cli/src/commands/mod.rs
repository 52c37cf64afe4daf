mod batches;
mod vocab;

/// Subcommands for clsprep
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build the vocabulary from the train split and save it.
    Vocab(vocab::VocabArgs),

    /// Encode every split and iterate its batches.
    Batches(batches::BatchesArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Batches(cmd) => cmd.run(),
        }
    }
}
