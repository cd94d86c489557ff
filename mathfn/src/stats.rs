//! Arithmetic mean over integer samples

use tracing::{debug, warn};

use crate::error::{MathError, Result};

/// Running arithmetic mean of `i32` samples.
///
/// The sum is kept in `i128`: `u64::MAX` samples of magnitude 2^31 stay below
/// 2^95, so no sequence of pushes can overflow it. Conversion to `f64` happens
/// once, in [`Mean::value`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mean {
    sum: i128,
    count: u64,
}

impl Mean {
    /// Empty accumulator
    pub const fn new() -> Self {
        Self { sum: 0, count: 0 }
    }

    /// Add one sample
    pub fn push(&mut self, value: i32) {
        self.sum += i128::from(value);
        self.count += 1;
    }

    /// Number of samples pushed so far
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Current mean, `None` before the first sample
    pub fn value(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum as f64 / self.count as f64)
    }
}

impl Extend<i32> for Mean {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a> Extend<&'a i32> for Mean {
    fn extend<I: IntoIterator<Item = &'a i32>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<i32> for Mean {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut mean = Mean::new();
        mean.extend(iter);
        mean
    }
}

/// Arithmetic mean of `numbers`.
///
/// The result lies in `[min, max]` of the input, does not depend on element
/// order and is always finite.
///
/// # Errors
///
/// [`MathError::InvalidArgument`] when `numbers` is empty.
///
/// ```
/// assert_eq!(mathfn::calculate_average(&[2, 4, 6]), Ok(4.0));
/// assert!(mathfn::calculate_average(&[]).is_err());
/// ```
pub fn calculate_average(numbers: &[i32]) -> Result<f64> {
    let mut mean = Mean::new();
    mean.extend(numbers);

    match mean.value() {
        Some(avg) => {
            debug!(count = mean.count(), avg, "average computed");
            Ok(avg)
        }
        None => {
            warn!("average rejected: empty input");
            Err(MathError::InvalidArgument("numbers must not be empty"))
        }
    }
}

/// [`calculate_average`] for an input that may be absent.
///
/// # Errors
///
/// [`MathError::InvalidArgument`] when `numbers` is `None` or empty.
pub fn calculate_average_opt(numbers: Option<&[i32]>) -> Result<f64> {
    match numbers {
        Some(numbers) => calculate_average(numbers),
        None => {
            warn!("average rejected: absent input");
            Err(MathError::InvalidArgument("numbers must be present"))
        }
    }
}
