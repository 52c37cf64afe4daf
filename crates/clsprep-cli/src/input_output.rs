use std::{
    fs::File,
    io::{BufWriter, Write},
};

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file, overriding the configured vocab path;
    /// "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output, falling back to `default_path`.
    pub fn open_writer(
        &self,
        default_path: &str,
    ) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        let path = self.output.as_deref().unwrap_or(default_path);
        Ok(if path == "-" {
            Box::new(BufWriter::new(std::io::stdout().lock()))
        } else {
            Box::new(BufWriter::new(File::create(path)?))
        })
    }
}
