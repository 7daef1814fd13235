use serde::{Deserialize, Serialize};

/// Lower and upper bound humidity is held to after every telemetry update.
pub const HUMIDITY_RANGE: (f64, f64) = (30.0, 90.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub temp_c: f64,
    pub condition: String,
    pub rain_mm: f64,
}

impl ForecastDay {
    pub fn new(day: &str, temp_c: f64, condition: &str, rain_mm: f64) -> Self {
        Self {
            day: day.to_string(),
            temp_c,
            condition: condition.to_string(),
            rain_mm,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub rainfall_mm: f64,
    pub wind_speed_kmh: f64,
    pub forecast: Vec<ForecastDay>,
}

impl WeatherReading {
    /// Reading the dashboard starts every session with.
    pub fn seed() -> Self {
        Self {
            temperature_c: 24.0,
            humidity_percent: 65.0,
            rainfall_mm: 12.0,
            wind_speed_kmh: 8.0,
            forecast: vec![
                ForecastDay::new("Today", 24.0, "Partly Cloudy", 0.0),
                ForecastDay::new("Tomorrow", 26.0, "Sunny", 0.0),
                ForecastDay::new("Day 3", 22.0, "Light Rain", 5.0),
                ForecastDay::new("Day 4", 25.0, "Sunny", 0.0),
                ForecastDay::new("Day 5", 23.0, "Cloudy", 2.0),
            ],
        }
    }

    pub fn forecast_rain_total_mm(&self) -> f64 {
        self.forecast.iter().map(|d| d.rain_mm).filter(|r| *r >= 0.0).sum()
    }
}

impl Default for WeatherReading {
    fn default() -> Self {
        Self::seed()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// Convert a Celsius reading into this unit.
    pub fn convert(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }

    pub fn format(&self, celsius: f64) -> String {
        format!("{:.0}{}", self.convert(celsius), self.symbol())
    }

    pub fn toggle(&self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "c" | "celsius" | "°c" => Some(TemperatureUnit::Celsius),
            "f" | "fahrenheit" | "°f" => Some(TemperatureUnit::Fahrenheit),
            _ => None,
        }
    }
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_to_fahrenheit_known_values() {
        assert!((celsius_to_fahrenheit(0.0) - 32.0).abs() < 0.001);
        assert!((celsius_to_fahrenheit(100.0) - 212.0).abs() < 0.001);
        assert!((celsius_to_fahrenheit(-40.0) - (-40.0)).abs() < 0.001);
        // Wheat optimum
        assert!((celsius_to_fahrenheit(22.0) - 71.6).abs() < 0.01);
    }

    #[test]
    fn seed_reading_matches_dashboard_defaults() {
        let w = WeatherReading::seed();
        assert_eq!(w.temperature_c, 24.0);
        assert_eq!(w.humidity_percent, 65.0);
        assert_eq!(w.forecast.len(), 5);
        assert_eq!(w.forecast[2].condition, "Light Rain");
        assert!((w.forecast_rain_total_mm() - 7.0).abs() < 1e-9);
    }

    #[test]
    fn temperature_unit_formatting() {
        assert_eq!(TemperatureUnit::Celsius.format(24.4), "24°C");
        assert_eq!(TemperatureUnit::Fahrenheit.format(0.0), "32°F");
        assert_eq!(
            TemperatureUnit::Celsius.toggle(),
            TemperatureUnit::Fahrenheit
        );
    }

    #[test]
    fn temperature_unit_from_str() {
        assert_eq!(
            TemperatureUnit::from_str("Celsius"),
            Some(TemperatureUnit::Celsius)
        );
        assert_eq!(TemperatureUnit::from_str("f"), Some(TemperatureUnit::Fahrenheit));
        assert_eq!(TemperatureUnit::from_str("kelvin"), None);
    }
}
