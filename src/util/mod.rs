//! Helpers for producing test signals and the errors they report.

use std::error;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum MathError {
    InvalidSampleRate,
    InvalidDuration,
    InvalidFrequency,
    TooManySamples,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let desc = match *self {
            MathError::InvalidSampleRate => {
                "Invalid sample rate, must be finite and greater than 0"
            }
            MathError::InvalidDuration => {
                "Invalid duration, must be finite and not negative"
            }
            MathError::InvalidFrequency => {
                "Invalid frequency, must be finite and not negative"
            }
            MathError::TooManySamples => {
                "Sample rate times duration exceeds the supported signal length"
            }
        };
        write!(f, "Math error: {}", desc)
    }
}

impl error::Error for MathError {
    fn cause(&self) -> Option<&dyn error::Error> {
        None
    }
}

/// Signal generators used to exercise filters
pub mod math;
