//! Fixed length delay line used to hold filter history.
//!
//! The line keeps the `capacity` most recent samples in a ring buffer. New
//! samples are written at a moving head index, so inserting a sample never
//! moves existing data and never allocates.  Reads are always relative to the
//! head: offset 0 is the newest sample, offset 1 the one before it, and so on.

use num_traits::Num;

/// A ring buffer of the most recent samples, newest first.
#[derive(Clone, Debug, PartialEq)]
pub struct DelayLine<T> {
    buffer: Vec<T>,
    head: usize,
}

impl<T> DelayLine<T>
where
    T: Num + Copy,
{
    /// Creates a delay line of `capacity` samples, all set to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use iir_rs::filter::delay_line::DelayLine;
    ///
    /// let mut line = DelayLine::new(3);
    /// line.push(1.0_f64);
    /// line.push(2.0);
    /// assert_eq!(line.to_vec(), vec![2.0, 1.0, 0.0]);
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::with_value(capacity, T::zero())
    }

    /// Creates a delay line of `capacity` samples, all set to `value`.
    pub fn with_value(capacity: usize, value: T) -> Self {
        DelayLine {
            buffer: vec![value; capacity],
            head: 0,
        }
    }

    /// Number of samples held by the line. Fixed at construction.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Inserts `sample` as the newest entry, discarding the oldest one.
    pub fn push(&mut self, sample: T) {
        if self.buffer.is_empty() {
            return;
        }
        self.head = if self.head == 0 {
            self.buffer.len() - 1
        } else {
            self.head - 1
        };
        self.buffer[self.head] = sample;
    }

    /// Returns the sample `offset` steps in the past, 0 being the newest.
    pub fn get(&self, offset: usize) -> Option<T> {
        if offset >= self.buffer.len() {
            return None;
        }
        let index = (self.head + offset) % self.buffer.len();
        Some(self.buffer[index])
    }

    /// Iterates over the held samples from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (older, newer) = self.buffer.split_at(self.head);
        newer.iter().chain(older.iter())
    }

    /// Inner product of `coeffs` with the line, `coeffs[0]` weighting the
    /// newest sample.  Terms are accumulated in coefficient order starting
    /// from zero.  Extra coefficients or samples are ignored.
    pub fn dot(&self, coeffs: &[T]) -> T {
        coeffs
            .iter()
            .zip(self.iter())
            .fold(T::zero(), |acc, (c, x)| acc + *c * *x)
    }

    /// Sets every held sample back to zero.
    pub fn reset(&mut self) {
        for sample in self.buffer.iter_mut() {
            *sample = T::zero();
        }
        self.head = 0;
    }

    /// Copies the held samples out, newest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
