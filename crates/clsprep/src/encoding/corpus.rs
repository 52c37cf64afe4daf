//! # Corpus Lines
//!
//! Lines are:
//! ```terminaloutput
//! {TEXT}\t{LABEL}
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::errors::{ClsprepError, Result};
use crate::types::Label;

/// The text portion of a line: everything before the first tab.
pub fn text_field(line: &str) -> &str {
    match line.split_once('\t') {
        Some((text, _)) => text,
        None => line,
    }
}

/// Split a line into ``(text, label)`` on the first tab.
///
/// ## Errors
/// [`ClsprepError::MalformedLine`] if the tab is missing or the label is
/// not an integer.
pub fn split_labeled(line: &str) -> Result<(&str, Label)> {
    let (text, label) = line
        .split_once('\t')
        .ok_or_else(|| ClsprepError::MalformedLine("missing tab separator".to_string()))?;
    let label = label
        .trim()
        .parse::<Label>()
        .map_err(|e| ClsprepError::MalformedLine(format!("invalid label {label:?}: {e}")))?;
    Ok((text, label))
}

/// Apply `f` to each non-blank, trimmed line of a corpus file.
///
/// [`ClsprepError::MalformedLine`] errors from `f` are reported as
/// [`ClsprepError::Format`] with the path and 1-based line number.
pub fn for_each_record_line<P, F>(
    path: P,
    mut f: F,
) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(&str) -> Result<()>,
{
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        f(line).map_err(|e| e.at_line(path.to_string_lossy(), idx + 1))?;
    }
    Ok(())
}
