use std::fmt::Display;
use std::io;

use jobscope_vis::error::VisError;

#[derive(Debug)]
pub(crate) enum CliError {
    Vis(VisError),
    Path(String),
    Runtime(io::Error),
}

impl From<VisError> for CliError {
    fn from(error: VisError) -> Self {
        CliError::Vis(error)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Vis(error) => write!(f, "{cli_error} {error}"),
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
            CliError::Runtime(error) => {
                write!(f, "{cli_error} building the async runtime failed: {error}")
            }
        }
    }
}
