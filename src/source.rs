use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shown before reading a diagram from the keyboard.
pub const PROMPT: &str = "Enter your tree with an additional newline to terminate";

/// Failures getting hold of a diagram's lines.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file holding the diagram could not be opened.
    #[error("could not open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    /// A line could not be read.
    #[error("could not read input: {0}")]
    Read(#[from] io::Error),
}

/// Every line of `reader` up to the end of input, newlines stripped.
pub fn from_reader<R: BufRead>(reader: R) -> impl Iterator<Item = Result<String, SourceError>> {
    reader.lines().map(|line| line.map_err(SourceError::from))
}

/// Every line of the file at `path`.
pub fn from_file(path: impl AsRef<Path>) -> Result<impl Iterator<Item = Result<String, SourceError>>, SourceError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SourceError::Open { path: path.to_path_buf(), source })?;
    Ok(from_reader(BufReader::new(file)))
}

/// Lines typed at `reader`, up to the first empty one or the end of input.
pub fn from_keyboard<R: BufRead>(reader: R) -> impl Iterator<Item = Result<String, SourceError>> {
    from_reader(reader).take_while(|line| !matches!(line, Ok(line) if line.is_empty()))
}
