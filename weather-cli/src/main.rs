use weather_core::{
    TemperatureUnit,
    cep::AwesomeApiClient,
    constants::{DEFAULT_CEP_API_URL, DEFAULT_WEATHER_API_URL},
    weather::WeatherApiClient,
};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Args {
    /// Postal code to look up, e.g. 70150900 or 70150-900
    cep: String,

    /// WeatherAPI key
    #[arg(long, env = "WEATHER_APIKEY", hide_env_values = true, default_value = "")]
    api_key: String,

    /// Only print the temperature in this unit
    #[arg(short, long, value_enum)]
    unit: Option<TemperatureUnit>,

    #[arg(long, env = "CEP_API_URL", default_value = DEFAULT_CEP_API_URL)]
    cep_url: String,

    #[arg(long, env = "WEATHER_API_URL", default_value = DEFAULT_WEATHER_API_URL)]
    weather_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let http = weather_core::http_client()?;
    let cep_client = AwesomeApiClient::new(http.clone(), args.cep_url);
    let weather_client = WeatherApiClient::new(http, args.weather_url, args.api_key);

    let coordinates = cep_client
        .load(&args.cep)
        .await
        .with_context(|| format!("failed to look up cep {}", args.cep))?;

    tracing::info!(
        "cep {} is at {},{}",
        args.cep,
        coordinates.latitude(),
        coordinates.longitude()
    );

    let temperature = weather_client
        .load(coordinates.latitude(), coordinates.longitude())
        .await
        .context("failed to load current weather")?;

    match args.unit {
        Some(unit) => println!("{:.1}", temperature.in_unit(unit)),
        None => {
            for unit in TemperatureUnit::ALL {
                println!("{:.1}{}", temperature.in_unit(unit), unit.symbol());
            }
        }
    }

    Ok(())
}
