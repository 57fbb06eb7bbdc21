use anyhow::Context;
use clap::Parser;
use ticket_stats::utils::{logger, validation::Validate};
use ticket_stats::{CliConfig, CsvTicketSource, Settings, StatsEngine};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting ticket-stats");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = Settings::resolve(&cli).context("failed to load configuration")?;
    settings
        .validate()
        .context("configuration validation failed")?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let source = CsvTicketSource::new(&settings.input);
    let engine = StatsEngine::new(source);

    let report = match engine.run(&settings.destination, settings.period) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("❌ Ticket aggregation failed: {}", e);
            return Err(e).with_context(|| format!("could not process '{}'", settings.input));
        }
    };

    print!("{}", report.render(settings.format)?);
    tracing::info!("✅ Report for {} tickets completed", report.total_tickets);

    Ok(())
}
