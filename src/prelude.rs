//! This module provides an easy single import for those using this crate.

pub use crate::filter::delay_line::DelayLine;
pub use crate::filter::iir_filter::IirFilter;
pub use crate::filter::FilterError;
pub use crate::io::payload::{FilterPayload, FilterResult};
pub use crate::io::PayloadError;
