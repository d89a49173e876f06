use super::WeightGen;

/// Starts every weight at the same value, e.g. zero for a deterministic first fit.
#[derive(Debug, Clone, Copy)]
pub struct ConstWeightGen {
    value: f64,
}

impl ConstWeightGen {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl WeightGen for ConstWeightGen {
    fn sample(&mut self, n: usize) -> Vec<f64> {
        vec![self.value; n]
    }
}
