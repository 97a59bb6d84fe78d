//! Generic infinite impulse response (IIR) filtering.
//!
//! The heart of the crate is `filter::iir_filter::IirFilter`, which runs a
//! fixed difference equation over a stream of samples with memory fixed at
//! construction.  Around it sit a few helpers for generating test signals
//! and for reading and writing JSON payloads of coefficients and samples.
//!
//! # Example
//!
//! ```
//! use iir_rs::prelude::*;
//!
//! let mut filter = IirFilter::new(&[0.5, 0.5], &[1.0, -0.5]).unwrap();
//! let output = filter.filter(&[1.0, 0.0, 0.0]);
//! assert_eq!(output, vec![0.5, 0.75, 0.375]);
//! ```

pub mod filter;
pub mod io;
pub mod prelude;
pub mod util;
