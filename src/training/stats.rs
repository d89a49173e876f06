/// Statistics produced by a single `fit` call.
///
/// This type keeps fields private to allow evolving the internal counters without breaking the
/// public API.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FitStats {
    epochs: usize,
    batches: usize,
    samples: usize,
    last_epoch_loss: Option<f64>,
}

impl FitStats {
    /// Records a finished epoch.
    ///
    /// # Arguments
    /// * `batches` - Number of batches processed during the epoch.
    /// * `samples` - Number of samples those batches contained.
    /// * `loss_sum` - The sum of the mean loss of every batch.
    pub(crate) fn record_epoch(&mut self, batches: usize, samples: usize, loss_sum: f64) {
        self.epochs += 1;
        self.batches += batches;
        self.samples += samples;
        self.last_epoch_loss = (batches > 0).then(|| loss_sum / batches as f64);
    }

    /// Returns the number of epochs run.
    pub fn epochs(&self) -> usize {
        self.epochs
    }

    /// Returns the number of batches processed over all epochs, i.e. the number of weight
    /// updates.
    pub fn batches(&self) -> usize {
        self.batches
    }

    /// Returns the number of samples consumed over all epochs, trailing partial batches
    /// excluded.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Returns the mean batch loss of the last epoch, `None` if it had no batches.
    pub fn last_epoch_loss(&self) -> Option<f64> {
        self.last_epoch_loss
    }
}
