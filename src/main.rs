use clap::Parser;
use customer_bridge::config::toml_config::TomlConfig;
use customer_bridge::core::{BatchSummary, ConfigProvider};
use customer_bridge::utils::error::{BridgeError, ErrorSeverity};
use customer_bridge::utils::{logger, validation::Validate};
use customer_bridge::{
    BatchEngine, CliConfig, LocalStorage, LookupAdapter, LookupPipeline, SampleTarget,
    XmlServiceClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting customer-bridge batch");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let dry_run = config.dry_run;
    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - sample accounts, no calls to the service");
    }

    let result = match config.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(&path) {
                Ok(toml_config) => execute(toml_config, dry_run).await,
                Err(e) => Err(e),
            }
        }
        None => execute(config, dry_run).await,
    };

    match result {
        Ok(summary) => {
            tracing::info!("✅ Batch completed successfully!");
            println!(
                "✅ {} lookup(s): {} succeeded, {} failed, {} blank line(s) skipped",
                summary.processed, summary.succeeded, summary.failed, summary.skipped
            );
            println!("📁 Requests saved to: {}", summary.requests_path);
            println!("📁 Responses saved to: {}", summary.responses_path);
        }
        Err(e) => report_failure(&e),
    }

    Ok(())
}

async fn execute<C>(config: C, dry_run: bool) -> customer_bridge::Result<BatchSummary>
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    config.validate()?;
    tracing::info!(
        "Service: {} (timeout {:?}), input: {}",
        config.service_base_url(),
        config.request_timeout(),
        config.input_file()
    );

    let storage = LocalStorage::new(".".to_string());

    if dry_run {
        let pipeline = LookupPipeline::new(storage, config, SampleTarget::default());
        return BatchEngine::new(pipeline).run().await;
    }

    let client = XmlServiceClient::from_config(&config)?;
    let pipeline = LookupPipeline::new(storage, config, LookupAdapter::new(client));
    BatchEngine::new(pipeline).run().await
}

fn report_failure(e: &BridgeError) {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ Batch failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,      // 警告，但成功
        ErrorSeverity::Medium => 2,   // 可重試
        ErrorSeverity::High => 1,     // 處理錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}
