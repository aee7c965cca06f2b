use std::time::Duration;

pub const DEFAULT_CEP_API_URL: &str = "https://cep.awesomeapi.com.br";
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.weatherapi.com";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const CEP_DIGITS: usize = 8;
/// Digits before the optional dash in `NNNNN-NNN`.
pub const CEP_PREFIX_DIGITS: usize = 5;

// WeatherAPI error code for "No matching location found."
pub const WEATHER_API_NO_LOCATION_CODE: u32 = 1006;

pub const FAHRENHEIT_SCALE: f64 = 1.8;
pub const FAHRENHEIT_OFFSET: f64 = 32.0;
pub const KELVIN_OFFSET: f64 = 273.0;
