use clap::Parser;
use std::time::Duration;
use trello_pressure::app::report::{render_json, render_text};
use trello_pressure::core::ConfigProvider;
use trello_pressure::utils::error::{ErrorSeverity, PressureError};
use trello_pressure::utils::{logger, validation::Validate};
use trello_pressure::{
    CliConfig, ColorMapper, PressureEngine, PressureReport, TomlConfig, TrelloClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting trello-pressure");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            match TomlConfig::from_file(path) {
                Ok(mut file_config) => {
                    file_config.fill_from_cli(&cli);
                    run(&file_config, &cli).await
                }
                Err(e) => Err(e),
            }
        }
        None => run(&cli, &cli).await,
    };

    if let Err(e) = outcome {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Pressure check failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run<C>(config: &C, cli: &CliConfig) -> Result<(), PressureError>
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    config.validate()?;

    let mapper = ColorMapper::new(config.max_threshold())?;
    let client = TrelloClient::from_config(config);
    let engine = PressureEngine::new(client, mapper, config.list_selector());

    match cli.interval_secs {
        None => poll_once(&engine, cli.json).await,
        Some(secs) => {
            tracing::info!("Polling every {}s", secs);
            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::warn!("Could not listen for Ctrl-C: {}", e);
                    std::future::pending::<()>().await;
                }
            };

            engine
                .watch(Duration::from_secs(secs), shutdown, |outcome| {
                    // 單次失敗不中止輪詢，等待下一次
                    if let Err(e) = outcome.and_then(|report| print_report(&report, cli.json)) {
                        tracing::warn!("Polling pass failed: {} ({})", e, e.recovery_suggestion());
                    }
                })
                .await;
            Ok(())
        }
    }
}

async fn poll_once(engine: &PressureEngine<TrelloClient>, json: bool) -> Result<(), PressureError> {
    let report = engine.run().await?;
    print_report(&report, json)
}

fn print_report(report: &PressureReport, json: bool) -> Result<(), PressureError> {
    if json {
        println!("{}", render_json(report)?);
    } else {
        println!("{}", render_text(report));
    }

    Ok(())
}
