pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::{router, AppState};
pub use config::ServerConfig;
pub use core::{classifier::SentimentClassifier, lexicon::LexiconScorer};
pub use domain::model::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, SentimentLabel};
pub use domain::ports::PolarityScorer;
pub use server::{build_scorer, serve, serve_with_listener};
pub use utils::error::{Result, ServiceError};
