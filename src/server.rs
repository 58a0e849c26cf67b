use crate::adapters::http::{router, AppState};
use crate::config::ServerConfig;
use crate::core::lexicon::LexiconScorer;
use crate::core::PolarityScorer;
use crate::utils::error::{Result, ServiceError};
use std::future::Future;
use tokio::net::TcpListener;

/// Default scorer for `config`: built-in lexicon plus configured extra words.
pub fn build_scorer(config: &ServerConfig) -> LexiconScorer {
    LexiconScorer::new().with_words(
        config
            .extra_words
            .iter()
            .map(|(word, score)| (word.as_str(), *score)),
    )
}

/// Binds `config.bind_address()` and serves until Ctrl-C or SIGTERM.
pub async fn serve<S: PolarityScorer + 'static>(config: ServerConfig, scorer: S) -> Result<()> {
    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr).await.map_err(|e| {
        tracing::error!("Failed to bind listener to {}: {}", bind_addr, e);
        ServiceError::ConfigError {
            message: format!(
                "Failed to bind {}: {}. Address may be in use or require elevated permissions.",
                bind_addr, e
            ),
        }
    })?;

    serve_with_listener(listener, &config, scorer, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` resolves.
pub async fn serve_with_listener<S, F>(
    listener: TcpListener,
    config: &ServerConfig,
    scorer: S,
    shutdown: F,
) -> Result<()>
where
    S: PolarityScorer + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(AppState::new(scorer), config)?;

    let local_addr = listener.local_addr()?;
    tracing::info!(
        "Sentiment API listening on http://{} (cors: {})",
        local_addr,
        config.allowed_origins.join(", ")
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Sentiment API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
