use activity_roster::utils::{error::ErrorCategory, logger};
use activity_roster::{web, CliConfig, InMemoryCatalog, RosterService};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting activity-roster");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                "❌ Configuration failed: {} (Category: {:?})",
                e,
                e.category()
            );
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            let exit_code = match e.category() {
                ErrorCategory::System => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    };

    let catalog = config.build_catalog()?;
    tracing::info!(
        "📋 Loaded {} activities ({})",
        catalog.len(),
        if config.uses_builtin_seed() {
            "built-in seed"
        } else {
            "from configuration"
        }
    );

    let service = Arc::new(RosterService::new(InMemoryCatalog::new(catalog)));
    let app = web::router(service, config.server.static_dir.as_deref().map(Path::new));

    // 使用者明確指定 --port 時不自動換埠
    let allow_fallback = cli.port.is_none();
    let listener =
        web::bind_with_fallback(&config.server.host, config.server.port, allow_fallback).await?;
    let bound_addr = listener.local_addr()?;
    tracing::info!("🚀 Server listening on http://{}", bound_addr);
    println!("🚀 Server listening on http://{}", bound_addr);

    web::serve(listener, app).await?;
    Ok(())
}
