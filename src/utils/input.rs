use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Errors returned when reading values from text.
#[derive(Error, Debug)]
pub enum ReadValuesError {
    #[error("Cannot open value file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {token:?} at line {line} as a floating-point value")]
    Parse {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Parses values separated by whitespace from `reader`.
///
/// Everything following a `#` on a line is a comment. Line numbers in errors
/// start from one.
///
/// # Examples
/// ```
/// # use compensated::utils::parse_values;
/// let text = "1.0 2.0 # first line\n\n3E-3\n";
/// let values: Vec<f64> = parse_values(text.as_bytes())?;
/// assert_eq!(values, vec![1.0, 2.0, 3E-3]);
/// # Ok::<(), compensated::utils::ReadValuesError>(())
/// ```
pub fn parse_values<F: FromStr<Err = ParseFloatError>>(
    reader: impl BufRead,
) -> Result<Vec<F>, ReadValuesError> {
    let mut values = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| ReadValuesError::Read {
            line: line_number,
            source,
        })?;
        let content = line
            .split_once('#')
            .map_or(line.as_str(), |(content, _comment)| content);
        for token in content.split_ascii_whitespace() {
            let value = token.parse().map_err(|source| ReadValuesError::Parse {
                line: line_number,
                token: token.to_owned(),
                source,
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Reads values from the file at `path`; see [`parse_values`] for the format.
pub fn read_values<F: FromStr<Err = ParseFloatError>>(
    path: impl AsRef<Path>,
) -> Result<Vec<F>, ReadValuesError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadValuesError::Open {
        path: path.to_owned(),
        source,
    })?;
    parse_values(BufReader::new(file))
}
