use crate::error::ScalarGradError;
use crate::value::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

pub const DEFAULT_INIT_LOW: f64 = -1.0;
pub const DEFAULT_INIT_HIGH: f64 = 1.0;

/// Parameter initialisation settings: weights and biases are drawn from
/// `U[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitConfig {
    /// Lower bound (inclusive).
    pub low: f64,
    /// Upper bound (inclusive).
    pub high: f64,
    /// Seed for a reproducible draw. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            low: DEFAULT_INIT_LOW,
            high: DEFAULT_INIT_HIGH,
            seed: None,
        }
    }
}

impl InitConfig {
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the range. Returns `Ok(())` if valid, or
    /// [`ScalarGradError::InvalidConfiguration`].
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "init range bounds must be finite, got [{}, {}]",
                self.low, self.high
            )));
        }
        if self.low > self.high {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "init range low ({}) must not exceed high ({})",
                self.low, self.high
            )));
        }
        Ok(())
    }

    /// Builds the generator described by `seed`.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Checked sampling distribution for this range.
    pub(crate) fn distribution(&self) -> Result<Uniform<f64>, ScalarGradError> {
        self.validate()?;
        Ok(Uniform::new_inclusive(self.low, self.high))
    }
}

/// Draws `n` fresh leaves from `dist`, labelled `w0`, `w1`, ...
pub(crate) fn weight_leaves<R: Rng + ?Sized>(
    n: usize,
    dist: &Uniform<f64>,
    rng: &mut R,
) -> Vec<Value> {
    (0..n)
        .map(|i| Value::with_label(dist.sample(rng), format!("w{}", i)))
        .collect()
}

/// Draws a single bias leaf from `dist`, labelled `b`.
pub(crate) fn bias_leaf<R: Rng + ?Sized>(dist: &Uniform<f64>, rng: &mut R) -> Value {
    Value::with_label(dist.sample(rng), "b")
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
