use crate::constants::{FAHRENHEIT_OFFSET, FAHRENHEIT_SCALE, KELVIN_OFFSET};

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * FAHRENHEIT_SCALE + FAHRENHEIT_OFFSET
}

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

/// A temperature reading in the three units served by the API.
///
/// Only the Celsius value is ever supplied; the other two are derived from it
/// on construction, so a [Temperature] can never hold inconsistent units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Temperature {
    celsius: f64,
    fahrenheit: f64,
    kelvin: f64,
}

impl Temperature {
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            celsius,
            fahrenheit: celsius_to_fahrenheit(celsius),
            kelvin: celsius_to_kelvin(celsius),
        }
    }

    pub fn celsius(&self) -> f64 {
        self.celsius
    }

    pub fn fahrenheit(&self) -> f64 {
        self.fahrenheit
    }

    pub fn kelvin(&self) -> f64 {
        self.kelvin
    }

    pub fn in_unit(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.celsius,
            TemperatureUnit::Fahrenheit => self.fahrenheit,
            TemperatureUnit::Kelvin => self.kelvin,
        }
    }
}

#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

/// Decimal-degree coordinates as returned by the CEP lookup.
///
/// Kept as strings: they are handed to the weather lookup verbatim and never
/// used numerically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinates {
    latitude: String,
    longitude: String,
}

impl Coordinates {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    pub fn longitude(&self) -> &str {
        &self.longitude
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn test_celsius_to_kelvin() {
        assert_eq!(celsius_to_kelvin(0.0), 273.0);
        assert_eq!(celsius_to_kelvin(-273.0), 0.0);
        assert_eq!(celsius_to_kelvin(25.5), 298.5);
    }

    #[test]
    fn test_temperature_units_are_derived_from_celsius() {
        for celsius in [-12.3, 0.0, 21.7, 37.0] {
            let temp = Temperature::from_celsius(celsius);

            assert_eq!(temp.celsius(), celsius);
            assert_eq!(temp.fahrenheit(), celsius * 1.8 + 32.0);
            assert_eq!(temp.kelvin(), celsius + 273.0);
        }
    }

    #[test]
    fn test_in_unit() {
        let temp = Temperature::from_celsius(10.0);

        assert_eq!(temp.in_unit(TemperatureUnit::Celsius), 10.0);
        assert_eq!(temp.in_unit(TemperatureUnit::Fahrenheit), 50.0);
        assert_eq!(temp.in_unit(TemperatureUnit::Kelvin), 283.0);
    }
}
