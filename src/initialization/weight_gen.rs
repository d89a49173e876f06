/// A `WeightGen` generates values for the initial state of the model's weights.
pub trait WeightGen {
    /// Samples exactly `n` weights.
    fn sample(&mut self, n: usize) -> Vec<f64>;
}
