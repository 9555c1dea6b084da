use cutoff_core::CutoffError;
use thiserror::Error;

pub(crate) type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub(crate) enum CliError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid cutoff options, more details: {0}")]
    InvalidOptions(#[from] CutoffError),
}
