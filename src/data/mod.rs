mod export;
mod roster;
mod synth;

pub use export::*;
pub use roster::*;
pub use synth::*;

use thiserror::Error;

/// Errors produced while reading rosters or writing timetables.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("i/o failure")]
    Io(#[from] std::io::Error),
    #[error("malformed csv")]
    Csv(#[from] csv::Error),
    #[error("roster contains no teachers")]
    EmptyRoster,
    #[error("teacher {0} lists no subjects")]
    NoSubjects(String),
}
