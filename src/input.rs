//! Input acquisition from files or standard input.

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// No file given and stdin is an interactive terminal.
    #[error("no input: pass a file, '-' for stdin, or pipe text in")]
    NoTty,

    #[error("failed to read {}: {source}", path.display())]
    File { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

/// Pick the input source: an explicit path, `-`, or piped stdin.
pub fn determine_input_source(path: Option<&Path>) -> Result<InputSource, InputError> {
    match path {
        Some(path) if path == Path::new("-") => Ok(InputSource::Stdin),
        Some(path) => Ok(InputSource::File(path.to_path_buf())),
        None if io::stdin().is_terminal() => Err(InputError::NoTty),
        None => Ok(InputSource::Stdin),
    }
}

pub fn read_input(source: &InputSource) -> Result<String, InputError> {
    match source {
        InputSource::File(path) => std::fs::read_to_string(path).map_err(|source| InputError::File {
            path: path.clone(),
            source,
        }),
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(InputError::Stdin)?;
            Ok(buffer)
        }
    }
}
