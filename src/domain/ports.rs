use crate::utils::error::Result;
use std::sync::Arc;

/// Computes a polarity in `[-1.0, 1.0]` for a piece of text.
///
/// Negative values lean negative, positive values lean positive, `0.0` is
/// neutral. Implementations must be safe to share across request handlers.
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<f64>;
}

impl<S: PolarityScorer + ?Sized> PolarityScorer for Arc<S> {
    fn score(&self, text: &str) -> Result<f64> {
        (**self).score(text)
    }
}

impl<S: PolarityScorer + ?Sized> PolarityScorer for Box<S> {
    fn score(&self, text: &str) -> Result<f64> {
        (**self).score(text)
    }
}
