use clap::Parser;
use salary_stats::utils::{logger, validation::Validate};
use salary_stats::{print_report, CliConfig, EnvSecrets, StatsEngine};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig) -> salary_stats::Result<()> {
    // .env has to be loaded before the config file so ${VAR} can see it.
    let secrets = EnvSecrets::with_dotenv();

    let config = cli.load_config()?;
    config.validate()?;

    let engine = StatsEngine::from_config(&config, cli.source, &secrets)?;
    engine
        .run_each(|report| Ok(print_report(report)?))
        .await?;

    tracing::info!("✅ Done");
    Ok(())
}
