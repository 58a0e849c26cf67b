use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /analyze`. A missing or `null` `text` is the same as `""`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl AnalyzeRequest {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Sign of the polarity decides the label; exactly zero is neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub sentiment: SentimentLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_text_resolve_to_empty() {
        let missing: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        let null: AnalyzeRequest = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert_eq!(missing.text(), "");
        assert_eq!(null.text(), "");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"text": "hello", "lang": "en"}"#).unwrap();
        assert_eq!(req.text(), "hello");
    }

    #[test]
    fn test_label_from_polarity() {
        assert_eq!(SentimentLabel::from_polarity(0.4), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(-0.01), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_response_wire_format() {
        let body = serde_json::to_value(AnalyzeResponse {
            sentiment: SentimentLabel::Negative,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"sentiment": "Negative"}));

        let body = serde_json::to_value(ErrorResponse {
            error: "Text is required".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"error": "Text is required"}));
    }
}
