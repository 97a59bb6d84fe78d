//! Reading and writing filter payloads.
//!
//! A payload is a JSON object carrying the filter coefficients and the signal
//! to run through them.  The result written back carries the filter output
//! next to the original signal.

use crate::filter::FilterError;
use std::error;
use std::fmt;
use std::io;

pub mod payload;

#[derive(Debug)]
pub enum PayloadError {
    Io(io::Error),
    Parse(serde_json::Error),
    Filter(FilterError),
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PayloadError::Io(ref e) => write!(f, "Payload I/O error: {}", e),
            PayloadError::Parse(ref e) => {
                write!(f, "Malformed payload: {}", e)
            }
            PayloadError::Filter(ref e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for PayloadError {
    fn cause(&self) -> Option<&dyn error::Error> {
        match *self {
            PayloadError::Io(ref e) => Some(e),
            PayloadError::Parse(ref e) => Some(e),
            PayloadError::Filter(ref e) => Some(e),
        }
    }
}

impl From<io::Error> for PayloadError {
    fn from(e: io::Error) -> Self {
        PayloadError::Io(e)
    }
}

impl From<serde_json::Error> for PayloadError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            PayloadError::Io(e.into())
        } else {
            PayloadError::Parse(e)
        }
    }
}

impl From<FilterError> for PayloadError {
    fn from(e: FilterError) -> Self {
        PayloadError::Filter(e)
    }
}
