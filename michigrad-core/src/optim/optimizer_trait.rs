use crate::error::MichigradError;
use crate::value::Value;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers own handles to the parameters they update. The update reads
/// each parameter's accumulated `grad` and writes its `data`; gradients are
/// left untouched until [`Optimizer::zero_grad`].
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `MichigradError` if a
    /// parameter handle is stale.
    fn step(&mut self) -> Result<(), MichigradError>;

    /// Sets the gradient of every managed parameter to zero.
    ///
    /// Call it before each backward pass: the engine only ever adds to
    /// gradients.
    fn zero_grad(&mut self) -> Result<(), MichigradError>;

    fn learning_rate(&self) -> f64;

    fn set_learning_rate(&mut self, lr: f64);

    /// The parameters updated by [`Optimizer::step`].
    fn params(&self) -> &[Value];
}
