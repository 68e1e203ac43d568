use cep_lookup::core::report::PROMPT;
use cep_lookup::utils::{input::read_cep, logger, validation::Validate};
use cep_lookup::{CliConfig, LookupEngine};
use clap::Parser;
use std::io::Write;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

/// 查詢失敗不算錯誤，只有設定或 I/O 問題才會回傳 Err
async fn run(config: CliConfig) -> cep_lookup::Result<()> {
    config.validate()?;
    let engine = LookupEngine::from_config(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    let cep = read_cep(&mut std::io::stdin().lock())?;
    tracing::debug!("Read CEP: '{}'", cep);

    let outcomes = engine.run(&cep, &mut out).await?;
    let found = outcomes.iter().filter(|o| o.is_found()).count();
    tracing::info!("{} of {} providers resolved the CEP", found, outcomes.len());

    Ok(())
}
