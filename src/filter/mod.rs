//! Infinite impulse response (IIR) filtering.
//!
//! IIR filters are feedback based systems: every output depends on past
//! outputs as well as on the current and past inputs.  This makes them far
//! cheaper than FIR filters of comparable selectivity, often a handful of
//! coefficients where an FIR design would need dozens of taps, at the cost of
//! a non-linear phase response and the possibility of instability when the
//! coefficients are poorly chosen.
//!
//! The filters here do not design coefficients and do not check stability.
//! They run a given difference equation exactly, sample by sample.
//!
//! * `iir_filter` - the `IirFilter` type, with ring buffered history.
//! * `iir` - free functions running the same recurrence over shifted state.
//! * `delay_line` - the fixed length history buffer used by `IirFilter`.

use std::error;
use std::fmt;

pub mod delay_line;
pub mod iir;
pub mod iir_filter;

/// Reasons a set of coefficients cannot form a filter.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterError {
    EmptyNumerator,
    EmptyDenominator,
    ZeroLeadingDenominator,
}

impl FilterError {
    /// Every `FilterError` describes invalid coefficients.  Kept as a method
    /// so callers can match on the category rather than the variant.
    pub fn is_invalid_coefficients(&self) -> bool {
        match *self {
            FilterError::EmptyNumerator
            | FilterError::EmptyDenominator
            | FilterError::ZeroLeadingDenominator => true,
        }
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let desc = match *self {
            FilterError::EmptyNumerator => "Numerator must not be empty",
            FilterError::EmptyDenominator => "Denominator must not be empty",
            FilterError::ZeroLeadingDenominator => {
                "Leading denominator coefficient must be non-zero"
            }
        };
        write!(f, "Invalid coefficients: {}", desc)
    }
}

impl error::Error for FilterError {
    fn cause(&self) -> Option<&dyn error::Error> {
        None
    }
}
