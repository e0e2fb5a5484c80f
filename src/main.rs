use clap::Parser;
use direct_check::utils::{logger, validation::Validate};
use direct_check::{CheckEngine, CliConfig, DirectPipeline, LocalStorage, PingProber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting direct-check");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲、探測器和管道
    let storage = LocalStorage::new(config.output_path.clone());
    let prober = PingProber::new(config.probe_count);
    let pipeline = DirectPipeline::new(storage, config, prober);

    let engine = CheckEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Domain check completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Domain check completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Domain check failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                direct_check::utils::error::ErrorSeverity::Low => 0,
                direct_check::utils::error::ErrorSeverity::Medium => 2,
                direct_check::utils::error::ErrorSeverity::High => 1,
                direct_check::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
