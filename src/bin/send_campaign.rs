use safe2eat::{
    campaign::run_campaign,
    configuration::get_configuration,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("send_campaign".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().expect("Failed to read configuration");

    if !config.campaign.send_enabled {
        tracing::info!("Campaign sending is disabled in configuration. Exiting.");
        return Ok(());
    }

    let report = run_campaign(&config.campaign, &config.app.base_url).await?;
    tracing::info!(
        sent = report.sent,
        failed = report.failed,
        "Campaign run complete"
    );

    Ok(())
}
