//! Test signal generators.

use crate::util::MathError;
use std::f64::consts::PI;

/// Longest signal `chirp` will generate.
pub const MAX_SIGNAL_LEN: usize = 1 << 28;

/// Linear frequency sweep (chirp) generator.
///
/// Produces `round(sample_rate * duration)` samples of a unit amplitude sine
/// whose instantaneous frequency moves linearly from `start_freq` at t = 0 to
/// `end_freq` at t = `duration`.
///
/// sample_rate: Samples per second, in Hz
/// duration: Length of the sweep, in seconds
/// start_freq: Frequency at the first sample, in Hz
/// end_freq: Frequency at the end of the sweep, in Hz
///
/// # Examples
///
/// ```
/// use iir_rs::util::math::chirp;
///
/// let sweep = chirp(1000.0, 5.0, 1.0, 100.0).unwrap();
/// assert_eq!(sweep.len(), 5000);
/// assert_eq!(sweep[0], 0.0);
/// ```
pub fn chirp(
    sample_rate: f64,
    duration: f64,
    start_freq: f64,
    end_freq: f64,
) -> Result<Vec<f64>, MathError> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(MathError::InvalidSampleRate);
    }
    if !duration.is_finite() || duration < 0.0 {
        return Err(MathError::InvalidDuration);
    }
    for freq in &[start_freq, end_freq] {
        if !freq.is_finite() || *freq < 0.0 {
            return Err(MathError::InvalidFrequency);
        }
    }

    let n_samples = (sample_rate * duration).round();
    if !n_samples.is_finite() || n_samples > MAX_SIGNAL_LEN as f64 {
        return Err(MathError::TooManySamples);
    }
    let n_samples = n_samples as usize;
    let sweep_rate = if duration > 0.0 {
        (end_freq - start_freq) / duration
    } else {
        0.0
    };
    let signal = (0..n_samples)
        .map(|n| {
            let t = n as f64 / sample_rate;
            let phase = 2.0 * PI * (start_freq * t + 0.5 * sweep_rate * t * t);
            phase.sin()
        })
        .collect();
    Ok(signal)
}

/// A unit sample followed by `len - 1` zeros.
pub fn impulse(len: usize) -> Vec<f64> {
    let mut signal = vec![0.0; len];
    if let Some(first) = signal.first_mut() {
        *first = 1.0;
    }
    signal
}
