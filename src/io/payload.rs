//! JSON payloads consumed and produced by the filter runner.
//!
//! Input payloads look like
//!
//! ```text
//! {
//!     "numerator": [0.02008337, 0.04016673, 0.02008337],
//!     "denominator": [1.0, -1.56101808, 0.64135154],
//!     "signal": [1.0, 0.0, 0.0]
//! }
//! ```
//!
//! and results carry `output` and the original `signal`.  Everything is
//! written pretty printed with four space indentation.

use crate::filter::iir_filter::IirFilter;
use crate::filter::FilterError;
use crate::io::PayloadError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use std::io::{Read, Write};

/// Numerator of the second order low pass used for generated payloads.
pub const LOWPASS_NUMERATOR: [f64; 3] = [0.02008337, 0.04016673, 0.02008337];
/// Denominator of the second order low pass used for generated payloads.
pub const LOWPASS_DENOMINATOR: [f64; 3] = [1.0, -1.56101808, 0.64135154];

/// Coefficients plus the signal to filter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterPayload {
    pub numerator: Vec<f64>,
    pub denominator: Vec<f64>,
    pub signal: Vec<f64>,
}

/// Filter output alongside the signal that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterResult {
    pub output: Vec<f64>,
    pub signal: Vec<f64>,
}

impl FilterPayload {
    /// Wraps `signal` with the default low pass coefficients.
    pub fn lowpass(signal: Vec<f64>) -> Self {
        FilterPayload {
            numerator: LOWPASS_NUMERATOR.to_vec(),
            denominator: LOWPASS_DENOMINATOR.to_vec(),
            signal,
        }
    }

    /// Builds a filter from the payload coefficients and runs every signal
    /// sample through it in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use iir_rs::io::payload::FilterPayload;
    ///
    /// let payload = FilterPayload {
    ///     numerator: vec![1.0, 1.0],
    ///     denominator: vec![2.0],
    ///     signal: vec![2.0, 4.0, 6.0],
    /// };
    /// let result = payload.run().unwrap();
    /// assert_eq!(result.output, vec![1.0, 3.0, 5.0]);
    /// ```
    pub fn run(&self) -> Result<FilterResult, FilterError> {
        let mut filter = IirFilter::new(&self.numerator, &self.denominator)?;
        info!(
            "filtering {} samples with an order {} filter",
            self.signal.len(),
            filter.order()
        );
        let output = filter.filter(&self.signal);
        debug!("final filter state:\n{}", filter);
        Ok(FilterResult {
            output,
            signal: self.signal.clone(),
        })
    }
}

/// Parses a payload from `reader`.  Missing or mistyped fields are reported
/// as `PayloadError::Parse`.
pub fn read_payload<R: Read>(reader: R) -> Result<FilterPayload, PayloadError> {
    let payload: FilterPayload = serde_json::from_reader(reader)?;
    debug!(
        "read payload: {} numerator, {} denominator, {} signal values",
        payload.numerator.len(),
        payload.denominator.len(),
        payload.signal.len()
    );
    Ok(payload)
}

pub fn write_payload<W: Write>(
    writer: W,
    payload: &FilterPayload,
) -> Result<(), PayloadError> {
    write_pretty(writer, payload)
}

pub fn write_result<W: Write>(
    writer: W,
    result: &FilterResult,
) -> Result<(), PayloadError> {
    write_pretty(writer, result)
}

fn write_pretty<W, S>(writer: W, value: &S) -> Result<(), PayloadError>
where
    W: Write,
    S: Serialize,
{
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)?;
    let mut writer = ser.into_inner();
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
