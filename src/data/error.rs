use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

pub type Result<T> = std::result::Result<T, DataErr>;

/// The error type of data loading and preparation.
#[derive(Debug)]
pub enum DataErr {
    Io(io::Error),
    Csv(csv::Error),
    /// No row survived parsing.
    NoRows,
    ColumnOutOfRange { column: usize, width: usize },
    InvalidFraction(f64),
}

impl Display for DataErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataErr::Io(e) => write!(f, "io error: {e}"),
            DataErr::Csv(e) => write!(f, "csv error: {e}"),
            DataErr::NoRows => write!(f, "no valid rows were found"),
            DataErr::ColumnOutOfRange { column, width } => {
                write!(f, "column {column} is out of range for rows of width {width}")
            }
            DataErr::InvalidFraction(fraction) => {
                write!(f, "the train fraction must be in [0, 1], got {fraction}")
            }
        }
    }
}

impl Error for DataErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DataErr::Io(e) => Some(e),
            DataErr::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DataErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for DataErr {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}
