use clap::Parser;
use sentiment_api::utils::{logger, validation::Validate};
use sentiment_api::{build_scorer, serve, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let resolved = match cli.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(resolved.verbose, resolved.json_logs);

    tracing::info!("Starting sentiment-api");
    if resolved.verbose {
        tracing::debug!("Resolved config: {:?}", resolved.server);
    }

    // 驗證配置
    if let Err(e) = resolved.server.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let scorer = build_scorer(&resolved.server);
    tracing::info!("Lexicon scorer ready with {} words", scorer.len());

    serve(resolved.server, scorer).await?;

    Ok(())
}
