use csv::Error as CsvError;
use std::{fmt, io};

#[derive(Debug)]
pub enum ReadError {
    Io(io::Error),
    Csv(CsvError),
    MissingField(String),
    InvalidValue {
        field: String,
        line: u64,
        value: String,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(err) => write!(f, "failed to open table: {}", err),
            ReadError::Csv(err) => write!(f, "malformed table: {}", err),
            ReadError::MissingField(name) => write!(f, "table has no field named '{}'", name),
            ReadError::InvalidValue { field, line, value } => write!(
                f,
                "field '{}' on line {} is not numeric: '{}'",
                field, line, value
            ),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(err) => Some(err),
            ReadError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        ReadError::Io(err)
    }
}

impl From<CsvError> for ReadError {
    fn from(err: CsvError) -> Self {
        ReadError::Csv(err)
    }
}

/// A queryable attribute table.
///
/// Given a source name and an ordered list of field names, an implementation
/// returns every row of the source as a fixed-arity numeric tuple, in the
/// table's native order. Values are laid out in the order the fields were
/// requested.
pub trait TableSource {
    fn read_rows<const N: usize>(
        &self,
        source: &str,
        fields: &[&str; N],
    ) -> Result<Vec<[f64; N]>, ReadError>;
}
