//! Utilities shared by the binary, the tests and the benchmarks.

mod input;
pub use input::{parse_values, read_values, ReadValuesError};

mod lossy;
pub use lossy::lossy_pair;
