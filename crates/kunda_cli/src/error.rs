//! Errors surfaced by the `kunda` binary.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kunda_vedic_base::KundaError;

#[derive(Debug)]
#[non_exhaustive]
pub enum CliError {
    /// Reading the Lagna line or writing the report failed.
    Io(std::io::Error),
    /// Config file missing, unreadable or malformed.
    Config(String),
    /// Lagna input rejected by the parser.
    Kunda(KundaError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
            Self::Kunda(e) => write!(f, "{e}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(_) => None,
            Self::Kunda(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<KundaError> for CliError {
    fn from(e: KundaError) -> Self {
        Self::Kunda(e)
    }
}
