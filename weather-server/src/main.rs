mod config;
mod domain;
mod inbound;
mod outbound;

use tokio_util::sync::CancellationToken;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt::writer::MakeWriterExt};
use weather_core::{cep::AwesomeApiClient, weather::WeatherApiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::from_env()?;

    // Warnings and errors go to stderr, everything else to stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr.with_max_level(Level::WARN).or_else(std::io::stdout))
        .init();

    let http = weather_core::http_client()?;
    let cep_loader = AwesomeApiClient::new(http.clone(), &config.cep_api_url);
    let weather_loader =
        WeatherApiClient::new(http, &config.weather_api_url, &config.weather_api_key);
    let weather_service = domain::service::Service::new(cep_loader, weather_loader);

    let server_config = inbound::HttpServerConfig {
        host: &config.server_host,
        port: config.server_port,
    };
    let http_server = inbound::HttpServer::new(weather_service, server_config).await?;

    let shutdown = CancellationToken::new();
    tokio::spawn(inbound::lifecycle::cancel_on_signal(shutdown.clone()));

    http_server.run(shutdown).await
}
