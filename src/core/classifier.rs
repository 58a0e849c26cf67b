use crate::core::{PolarityScorer, Result, SentimentLabel};
use crate::utils::error::ServiceError;

pub const TEXT_REQUIRED_MESSAGE: &str = "Text is required";

/// Maps text to a coarse sentiment label using a pluggable polarity scorer.
pub struct SentimentClassifier<S: PolarityScorer> {
    scorer: S,
}

impl<S: PolarityScorer> SentimentClassifier<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Rejects empty text, otherwise labels it by the sign of its polarity.
    pub fn classify(&self, text: &str) -> Result<SentimentLabel> {
        if text.is_empty() {
            return Err(ServiceError::validation(TEXT_REQUIRED_MESSAGE));
        }

        let polarity = self.scorer.score(text)?;
        if !polarity.is_finite() {
            return Err(ServiceError::scoring(format!(
                "scorer returned a non-finite polarity: {}",
                polarity
            )));
        }

        let label = SentimentLabel::from_polarity(polarity);
        tracing::debug!(
            polarity,
            sentiment = label.as_str(),
            chars = text.chars().count(),
            "Classified text"
        );

        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedScorer(f64);

    impl PolarityScorer for FixedScorer {
        fn score(&self, _text: &str) -> Result<f64> {
            Ok(self.0)
        }
    }

    struct FailingScorer;

    impl PolarityScorer for FailingScorer {
        fn score(&self, _text: &str) -> Result<f64> {
            Err(ServiceError::scoring("backend unavailable"))
        }
    }

    #[derive(Default)]
    struct CountingScorer {
        calls: AtomicUsize,
    }

    impl PolarityScorer for CountingScorer {
        fn score(&self, _text: &str) -> Result<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(0.3)
        }
    }

    #[test]
    fn test_label_follows_polarity_sign() {
        let cases = [
            (1.0, SentimentLabel::Positive),
            (0.0001, SentimentLabel::Positive),
            (-0.0001, SentimentLabel::Negative),
            (-1.0, SentimentLabel::Negative),
        ];
        for (polarity, expected) in cases {
            let classifier = SentimentClassifier::new(FixedScorer(polarity));
            assert_eq!(classifier.classify("anything").unwrap(), expected);
        }
    }

    #[test]
    fn test_zero_polarity_is_neutral() {
        let classifier = SentimentClassifier::new(FixedScorer(0.0));
        assert_eq!(
            classifier.classify("The table is brown").unwrap(),
            SentimentLabel::Neutral
        );
    }

    #[test]
    fn test_empty_text_is_rejected_without_scoring() {
        let classifier = SentimentClassifier::new(CountingScorer::default());
        let err = classifier.classify("").unwrap_err();

        assert!(matches!(err, ServiceError::ValidationError { .. }));
        assert_eq!(err.public_message(), TEXT_REQUIRED_MESSAGE);
        assert_eq!(classifier.scorer().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_whitespace_is_scored_not_rejected() {
        let classifier = SentimentClassifier::new(FixedScorer(0.0));
        assert_eq!(classifier.classify("   ").unwrap(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_scorer_failure_propagates() {
        let classifier = SentimentClassifier::new(FailingScorer);
        let err = classifier.classify("hello").unwrap_err();
        assert!(matches!(err, ServiceError::ScoringError { .. }));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_non_finite_polarity_is_a_scoring_error() {
        for polarity in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let classifier = SentimentClassifier::new(FixedScorer(polarity));
            let err = classifier.classify("hello").unwrap_err();
            assert!(matches!(err, ServiceError::ScoringError { .. }));
        }
    }

    #[test]
    fn test_classify_is_idempotent() {
        let classifier = SentimentClassifier::new(CountingScorer::default());
        let first = classifier.classify("same input").unwrap();
        let second = classifier.classify("same input").unwrap();
        assert_eq!(first, second);
        assert_eq!(classifier.scorer().calls.load(Ordering::SeqCst), 2);
    }
}
