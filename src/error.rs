use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read the trace mode answer from stdin")]
    Prompt(#[source] io::Error),
    #[error("failed to write the report")]
    Report(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
