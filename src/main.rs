use clap::Parser;
use cv_tex::utils::{logger, validation::Validate};
use cv_tex::{CliConfig, GenerationEngine, LocalStorage, ResumePipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI arguments: {:?}", cli);

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let input_path = config.input_path.clone();
    let storage = LocalStorage::default();
    let pipeline = ResumePipeline::new(storage, config);
    let engine = GenerationEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("Generated {} from {}", output_path, input_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
