//! Implementation of an infinite impulse response (IIR) filter.
//!
//! The filter evaluates the direct form I difference equation
//!
//! ```text
//! a[0]*y[n] = b[0]*x[n] + b[1]*x[n-1] + ... + b[M-1]*x[n-M+1]
//!           - a[1]*y[n-1] - ... - a[N-1]*y[n-N+1]
//! ```
//!
//! one sample at a time.  Past inputs and outputs are kept in two delay lines
//! sized from the coefficient vectors, so memory is fixed at construction and
//! `step` does not allocate.
//!
//! Assume initial state of 0's.  Output values are returned exactly as
//! computed, so an unstable set of coefficients will happily produce
//! infinities and NaNs.

use crate::filter::delay_line::DelayLine;
use crate::filter::FilterError;
use log::debug;
use num_traits::Num;
use std::fmt;

/// A single channel IIR filter with owned coefficients and history.
#[derive(Clone, Debug)]
pub struct IirFilter<T> {
    numerator: Vec<T>,
    denominator: Vec<T>,
    inputs: DelayLine<T>,
    outputs: DelayLine<T>,
}

impl<T> IirFilter<T>
where
    T: Num + Copy,
{
    /// Constructs a new `IirFilter<T>` at rest.
    ///
    /// Both coefficient vectors are copied into the filter.  The input
    /// history holds as many samples as `numerator` and the output history
    /// one fewer than `denominator`, since `denominator[0]` only scales the
    /// output.
    ///
    /// # Arguments
    ///
    /// * `numerator` - Feed forward coefficients, at least one.
    /// * `denominator` - Feed back coefficients, at least one, with a
    ///   non-zero leading coefficient.
    ///
    /// # Examples
    ///
    /// ```
    /// use iir_rs::filter::iir_filter::IirFilter;
    ///
    /// let mut filter = IirFilter::new(
    ///     &[0.02008337, 0.04016673, 0.02008337],
    ///     &[1.0, -1.56101808, 0.64135154],
    /// )
    /// .unwrap();
    /// assert_eq!(filter.step(1.0), 0.02008337);
    ///
    /// assert!(IirFilter::new(&[1.0], &[0.0, 1.0]).is_err());
    /// ```
    pub fn new(
        numerator: &[T],
        denominator: &[T],
    ) -> Result<Self, FilterError> {
        if numerator.is_empty() {
            return Err(FilterError::EmptyNumerator);
        }
        match denominator.first() {
            None => return Err(FilterError::EmptyDenominator),
            Some(a0) if a0.is_zero() => {
                return Err(FilterError::ZeroLeadingDenominator)
            }
            Some(_) => (),
        }

        debug!(
            "creating IIR filter with {} numerator and {} denominator taps",
            numerator.len(),
            denominator.len()
        );
        Ok(IirFilter {
            numerator: numerator.to_vec(),
            denominator: denominator.to_vec(),
            inputs: DelayLine::new(numerator.len()),
            outputs: DelayLine::new(denominator.len() - 1),
        })
    }

    /// Filters a single sample and advances the filter by one step.
    pub fn step(&mut self, input: T) -> T {
        self.inputs.push(input);
        let feed_forward = self.inputs.dot(&self.numerator);
        let feed_back = self.outputs.dot(&self.denominator[1..]);
        let output = (feed_forward - feed_back) / self.denominator[0];
        self.outputs.push(output);
        output
    }

    /// Filters a batch of samples in order, as repeated calls to `step`.
    pub fn filter(&mut self, input: &[T]) -> Vec<T> {
        let mut output = Vec::with_capacity(input.len());
        for sample in input {
            output.push(self.step(*sample));
        }
        output
    }

    /// Returns the filter to rest, keeping its coefficients.
    pub fn reset(&mut self) {
        self.inputs.reset();
        self.outputs.reset();
    }

    pub fn numerator(&self) -> &[T] {
        &self.numerator
    }

    pub fn denominator(&self) -> &[T] {
        &self.denominator
    }

    /// Past inputs, newest first.  Always `numerator().len()` long.
    pub fn input_history(&self) -> Vec<T> {
        self.inputs.to_vec()
    }

    /// Past outputs, newest first.  Always `denominator().len() - 1` long.
    pub fn output_history(&self) -> Vec<T> {
        self.outputs.to_vec()
    }

    /// Filter order, the larger of the two coefficient vector lengths minus
    /// one.
    pub fn order(&self) -> usize {
        self.numerator.len().max(self.denominator.len()) - 1
    }
}

impl<T> IirFilter<T>
where
    T: Num + Copy + fmt::Debug,
{
    /// Textual snapshot of the coefficients and both histories.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<T> fmt::Display for IirFilter<T>
where
    T: Num + Copy + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "numerator: {:?}", self.numerator)?;
        writeln!(f, "denominator: {:?}", self.denominator)?;
        writeln!(f, "input_history: {:?}", self.inputs.to_vec())?;
        write!(f, "output_history: {:?}", self.outputs.to_vec())
    }
}

#[cfg(test)]
mod test {
    use crate::filter::iir::batch_iir;
    use crate::filter::iir_filter::IirFilter;
    use crate::filter::FilterError;
    use assert_approx_eq::assert_approx_eq;
    use num::Complex;
    use rand::distributions::Uniform;
    use rand::{thread_rng, Rng};

    const LOWPASS_NUM: [f64; 3] = [0.02008337, 0.04016673, 0.02008337];
    const LOWPASS_DEN: [f64; 3] = [1.0, -1.56101808, 0.64135154];

    fn random_vec(len: usize, low: f64, high: f64) -> Vec<f64> {
        let mut rng = thread_rng();
        let dist = Uniform::new(low, high);
        (0..len).map(|_| rng.sample(&dist)).collect()
    }

    fn random_filter_coeffs(m: usize, n: usize) -> (Vec<f64>, Vec<f64>) {
        let numerator = random_vec(m, -1.0, 1.0);
        let mut denominator = random_vec(n, -0.2, 0.2);
        denominator[0] = random_vec(1, 1.0, 2.0)[0];
        (numerator, denominator)
    }

    #[test]
    // Unit impulse through a second order low pass, checked against the
    // recurrence evaluated by hand.
    fn test_lowpass_impulse_response() {
        let mut filter = IirFilter::new(&LOWPASS_NUM, &LOWPASS_DEN).unwrap();
        let out = filter.filter(&[1.0, 0.0, 0.0, 0.0, 0.0]);

        let (b, a) = (LOWPASS_NUM, LOWPASS_DEN);
        let mut expected = vec![b[0]];
        expected.push(b[1] - a[1] * expected[0]);
        expected.push(b[2] - a[1] * expected[1] - a[2] * expected[0]);
        expected.push(-a[1] * expected[2] - a[2] * expected[1]);
        expected.push(-a[1] * expected[3] - a[2] * expected[2]);

        assert_eq!(out[0], 0.02008337);
        assert_approx_eq!(out[1], 0.0715172, 1e-6);
        for (x, y) in out.iter().zip(expected.iter()) {
            assert_approx_eq!(*x, *y, 1e-9);
        }
    }

    #[test]
    fn test_zero_input_zero_output() {
        let (numerator, denominator) = random_filter_coeffs(6, 4);
        let mut filter = IirFilter::new(&numerator, &denominator).unwrap();
        for _ in 0..500 {
            assert_eq!(filter.step(0.0), 0.0);
        }
    }

    #[test]
    // With no feedback the filter is an FIR filter and must match a direct
    // convolution of the input with the taps.
    fn test_fir_equivalence() {
        let taps = random_vec(7, -1.0, 1.0);
        let input = random_vec(64, -1.0, 1.0);
        let mut filter = IirFilter::new(&taps, &[1.0]).unwrap();
        let out = filter.filter(&input);

        for n in 0..input.len() {
            let mut expected = 0.0;
            for (k, tap) in taps.iter().enumerate() {
                if k <= n {
                    expected += tap * input[n - k];
                }
            }
            assert_approx_eq!(out[n], expected, 1e-12);
        }
        assert!(filter.output_history().is_empty());
    }

    #[test]
    fn test_history_lengths_are_fixed() {
        let mut filter =
            IirFilter::new(&[1.0, 2.0], &[1.0, 0.5, 0.25, 0.125]).unwrap();
        assert_eq!(filter.input_history(), vec![0.0; 2]);
        assert_eq!(filter.output_history(), vec![0.0; 3]);
        for x in random_vec(1000, -1.0, 1.0) {
            filter.step(x);
            assert_eq!(filter.input_history().len(), 2);
            assert_eq!(filter.output_history().len(), 3);
        }
        assert_eq!(filter.order(), 3);
    }

    #[test]
    fn test_histories_track_trailing_window() {
        let mut filter = IirFilter::new(&[1.0, 0.0, 0.0], &[1.0, 0.0]).unwrap();
        filter.filter(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(filter.input_history(), vec![4.0, 3.0, 2.0]);
        assert_eq!(filter.output_history(), vec![4.0]);
    }

    #[test]
    fn test_deterministic() {
        let (numerator, denominator) = random_filter_coeffs(5, 5);
        let input = random_vec(2000, -1.0, 1.0);
        let mut first = IirFilter::new(&numerator, &denominator).unwrap();
        let mut second = IirFilter::new(&numerator, &denominator).unwrap();
        assert_eq!(first.filter(&input), second.filter(&input));
    }

    #[test]
    // The ring buffered filter must produce exactly what the shifting
    // reference produces, across many wraps of both delay lines.
    fn test_matches_shifting_reference() {
        for &(m, n) in &[(1, 1), (1, 4), (4, 1), (3, 3), (8, 5), (2, 9)] {
            let (numerator, denominator) = random_filter_coeffs(m, n);
            let input = random_vec(300, -1.0, 1.0);
            let mut inputs = vec![0.0; m];
            let mut outputs = vec![0.0; n - 1];
            let expected = batch_iir(
                &input,
                &numerator,
                &denominator,
                &mut inputs,
                &mut outputs,
            );

            let mut filter = IirFilter::new(&numerator, &denominator).unwrap();
            assert_eq!(filter.filter(&input), expected);
            assert_eq!(filter.input_history(), inputs);
            assert_eq!(filter.output_history(), outputs);
        }
    }

    #[test]
    fn test_invalid_coefficients() {
        let empty: [f64; 0] = [];
        let err = IirFilter::new(&empty, &[1.0]).unwrap_err();
        assert_eq!(err, FilterError::EmptyNumerator);
        let err = IirFilter::new(&[1.0], &empty).unwrap_err();
        assert_eq!(err, FilterError::EmptyDenominator);
        let err = IirFilter::new(&[1.0], &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, FilterError::ZeroLeadingDenominator);
        assert!(err.is_invalid_coefficients());
    }

    #[test]
    fn test_coefficients_are_copied() {
        let mut numerator = vec![1.0, 1.0];
        let filter = IirFilter::new(&numerator, &[1.0]).unwrap();
        numerator[0] = 5.0;
        assert_eq!(filter.numerator(), &[1.0, 1.0]);
        assert_eq!(filter.denominator(), &[1.0]);
    }

    #[test]
    fn test_describe() {
        let mut filter = IirFilter::new(&[0.5, 0.25], &[2.0, 1.0]).unwrap();
        filter.step(1.0);
        let text = filter.describe();
        assert!(text.contains("numerator: [0.5, 0.25]"));
        assert!(text.contains("denominator: [2.0, 1.0]"));
        assert!(text.contains("input_history: [1.0, 0.0]"));
        assert!(text.contains("output_history: [0.25]"));
    }

    #[test]
    fn test_reset() {
        let mut filter = IirFilter::new(&LOWPASS_NUM, &LOWPASS_DEN).unwrap();
        let input = random_vec(50, -1.0, 1.0);
        let first = filter.filter(&input);
        filter.reset();
        assert_eq!(filter.input_history(), vec![0.0; 3]);
        assert_eq!(filter.output_history(), vec![0.0; 2]);
        assert_eq!(filter.filter(&input), first);
    }

    #[test]
    // Feedback with a pole outside the unit circle doubles every sample and
    // eventually overflows; nothing is clamped.
    fn test_unstable_output_propagates() {
        let mut filter = IirFilter::new(&[1.0_f64], &[1.0, -2.0]).unwrap();
        assert_eq!(
            filter.filter(&[1.0, 0.0, 0.0, 0.0]),
            vec![1.0, 2.0, 4.0, 8.0]
        );
        let mut last = 0.0;
        for _ in 0..1100 {
            last = filter.step(0.0);
        }
        assert!(last.is_infinite());

        let mut filter = IirFilter::new(&[1.0_f64, 1.0], &[1.0, 0.5]).unwrap();
        assert!(filter.step(std::f64::NAN).is_nan());
        assert!(filter.step(0.0).is_nan());
    }

    #[test]
    fn test_complex_samples() {
        let mut filter = IirFilter::new(
            &[Complex::new(1.0, 0.0), Complex::new(0.0, 1.0)],
            &[Complex::new(2.0, 0.0), Complex::new(0.0, 0.0)],
        )
        .unwrap();
        let out =
            filter.filter(&[Complex::new(2.0, 2.0), Complex::new(0.0, 0.0)]);
        assert_eq!(out[0], Complex::new(1.0, 1.0));
        // (i * (2 + 2i)) / 2
        assert_eq!(out[1], Complex::new(-1.0, 1.0));
    }
}
