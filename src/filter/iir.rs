//! Direct form I recurrence over caller owned state.
//!
//! These functions evaluate the IIR difference equation by shifting the
//! whole state vector on every sample.  They are simple enough to check by
//! hand and are what `IirFilter` is tested against, but `IirFilter` should be
//! preferred for long running streams since it avoids moving history around.
//!
//! `inputs` must be as long as `numerator` and `outputs` one shorter than
//! `denominator`.  Assume initial state of 0's unless the caller provides
//! otherwise.

use num_traits::Num;

/// Runs one sample through the recurrence.
///
/// # Arguments
///
/// * `input` - Input sample to be filtered.
/// * `numerator` - Feed forward coefficients, `numerator[0]` applied to the
///   newest input.
/// * `denominator` - Feed back coefficients, `denominator[0]` is the output
///   scale and must be non-zero.
/// * `inputs` - Past inputs, newest first.
/// * `outputs` - Past outputs, newest first.
///
/// # Examples
///
/// ```
/// use iir_rs::filter::iir::*;
///
/// let numerator = vec![0.5_f64, 0.5];
/// let denominator = vec![1.0_f64, -0.5];
/// let mut inputs = vec![0.0; 2];
/// let mut outputs = vec![0.0; 1];
///
/// let first = iir(&1.0, &numerator, &denominator, &mut inputs, &mut outputs);
/// let second = iir(&0.0, &numerator, &denominator, &mut inputs, &mut outputs);
/// assert_eq!(first, 0.5);
/// assert_eq!(second, 0.75);
/// ```
pub fn iir<T>(
    input: &T,
    numerator: &[T],
    denominator: &[T],
    inputs: &mut Vec<T>,
    outputs: &mut Vec<T>,
) -> T
where
    T: Num + Copy,
{
    inputs.rotate_right(1);
    inputs[0] = *input;
    let feed_forward = numerator
        .iter()
        .zip(inputs.iter())
        .fold(T::zero(), |acc, (b, x)| acc + *b * *x);
    let feed_back = denominator[1..]
        .iter()
        .zip(outputs.iter())
        .fold(T::zero(), |acc, (a, y)| acc + *a * *y);
    let output = (feed_forward - feed_back) / denominator[0];
    if !outputs.is_empty() {
        outputs.rotate_right(1);
        outputs[0] = output;
    }
    output
}

/// Runs a batch of samples through the recurrence.
///
/// # Arguments
///
/// * `input` - Input batch of samples to be filtered.
/// * `numerator` - Feed forward coefficients.
/// * `denominator` - Feed back coefficients.
/// * `inputs` - Past inputs, newest first.
/// * `outputs` - Past outputs, newest first.
///
/// # Examples
///
/// ```
/// use iir_rs::filter::iir::*;
///
/// let input: Vec<f64> = (0..100).map(|x| (x as f64).cos()).collect();
/// let numerator = vec![0.2, 0.6, 0.6, 0.2];
/// let denominator = vec![1.0, -0.3];
/// let mut inputs = vec![0.0; 4];
/// let mut outputs = vec![0.0; 1];
///
/// let output = batch_iir(
///     &input,
///     &numerator,
///     &denominator,
///     &mut inputs,
///     &mut outputs,
/// );
/// assert_eq!(output.len(), 100);
/// ```
pub fn batch_iir<T>(
    input: &[T],
    numerator: &[T],
    denominator: &[T],
    inputs: &mut Vec<T>,
    outputs: &mut Vec<T>,
) -> Vec<T>
where
    T: Num + Copy,
{
    let mut output = Vec::with_capacity(input.len());
    for sample in input {
        output.push(iir(sample, numerator, denominator, inputs, outputs));
    }
    output
}
