use crate::error::MichigradError;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// How a fresh parameter value is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform on `[low, high]`.
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std: f64 },
    Constant(f64),
}

/// Uniform on `[-1, 1]`, the classic micrograd neuron init.
impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Checks the bounds without drawing anything.
    pub fn validate(&self) -> Result<(), MichigradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low <= high) || !low.is_finite() || !high.is_finite() {
                    return Err(MichigradError::InvalidInit(format!(
                        "uniform bounds must be finite with low <= high, got [{}, {}]",
                        low, high
                    )));
                }
            }
            Init::Normal { mean, std } => {
                // Normal::new only rejects a non-finite std.
                if !(std >= 0.0) || !std.is_finite() || !mean.is_finite() {
                    return Err(MichigradError::InvalidInit(format!(
                        "normal needs a finite mean and a finite std >= 0, got mean={}, std={}",
                        mean, std
                    )));
                }
                Normal::new(mean, std).map_err(|e| {
                    MichigradError::InvalidInit(format!("normal(mean={}, std={}): {}", mean, std, e))
                })?;
            }
            Init::Constant(_) => {}
        }
        Ok(())
    }

    /// Draws one value.
    ///
    /// # Errors
    /// Returns `InvalidInit` if the bounds are invalid (see [`Init::validate`]).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, MichigradError> {
        self.validate()?;
        Ok(match *self {
            Init::Uniform { low, high } => rng.gen_range(low..=high),
            Init::Normal { mean, std } => {
                let normal = Normal::new(mean, std)
                    .map_err(|e| MichigradError::InvalidInit(e.to_string()))?;
                normal.sample(rng)
            }
            Init::Constant(c) => c,
        })
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
