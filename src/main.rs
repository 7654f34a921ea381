use base_value_editor::utils::logger;
use base_value_editor::{CliConfig, Console, EditEngine, LocalStorage, Settings, ValuesPipeline};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            println!("{}", e.user_friendly_message());
            println!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let pipeline = ValuesPipeline::new(LocalStorage::default(), settings, Console::stdio());
    let engine = EditEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!();
            println!("Data saved to {}", output_path);
        }
        Err(e) => {
            tracing::error!(fatal = e.is_fatal(), "Run failed: {}", e);
            tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());

            // 載入失敗不會寫檔；存檔失敗時本次編輯內容遺失
            if !e.is_fatal() {
                println!();
            }
            println!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}
