pub mod classifier;
pub mod lexicon;

pub use crate::domain::model::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, SentimentLabel};
pub use crate::domain::ports::PolarityScorer;
pub use crate::utils::error::Result;
