use crate::models::{SoilReading, WeatherReading, HUMIDITY_RANGE, MOISTURE_RANGE};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::VecDeque;

/// Number of samples retained for the monitoring view.
pub const HISTORY_CAPACITY: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySample {
    pub timestamp: DateTime<Utc>,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub moisture_percent: f64,
}

/// Current weather and soil readings for a session.
///
/// The store is the single writer of both readings; `tick` applies bounded
/// random drift to temperature, humidity and soil moisture.
#[derive(Debug, Clone)]
pub struct TelemetryStore {
    weather: WeatherReading,
    soil: SoilReading,
    last_updated: DateTime<Utc>,
    history: VecDeque<TelemetrySample>,
}

impl TelemetryStore {
    pub fn new(weather: WeatherReading, soil: SoilReading) -> Self {
        let mut store = Self {
            weather,
            soil,
            last_updated: Utc::now(),
            history: VecDeque::with_capacity(HISTORY_CAPACITY),
        };
        store.record_sample();
        store
    }

    pub fn weather(&self) -> &WeatherReading {
        &self.weather
    }

    pub fn soil(&self) -> &SoilReading {
        &self.soil
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Samples oldest first.
    pub fn history(&self) -> impl Iterator<Item = &TelemetrySample> {
        self.history.iter()
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (h_min, h_max) = HUMIDITY_RANGE;
        let (m_min, m_max) = MOISTURE_RANGE;

        self.weather.temperature_c += rng.random_range(-1.0..=1.0);
        self.weather.humidity_percent =
            (self.weather.humidity_percent + rng.random_range(-5.0..=5.0)).clamp(h_min, h_max);
        self.soil.moisture_percent =
            (self.soil.moisture_percent + rng.random_range(-2.5..=2.5)).clamp(m_min, m_max);

        self.last_updated = Utc::now();
        self.record_sample();

        tracing::debug!(
            temperature = self.weather.temperature_c,
            humidity = self.weather.humidity_percent,
            moisture = self.soil.moisture_percent,
            "Telemetry tick applied"
        );
    }

    fn record_sample(&mut self) {
        if self.history.len() == HISTORY_CAPACITY {
            self.history.pop_front();
        }
        self.history.push_back(TelemetrySample {
            timestamp: self.last_updated,
            temperature_c: self.weather.temperature_c,
            humidity_percent: self.weather.humidity_percent,
            moisture_percent: self.soil.moisture_percent,
        });
    }
}

impl Default for TelemetryStore {
    fn default() -> Self {
        Self::new(WeatherReading::seed(), SoilReading::seed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_store_exposes_seed_readings() {
        let store = TelemetryStore::default();
        assert_eq!(store.weather(), &WeatherReading::seed());
        assert_eq!(store.soil(), &SoilReading::seed());
        assert_eq!(store.history().count(), 1);
    }

    #[test]
    fn tick_keeps_humidity_and_moisture_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut store = TelemetryStore::default();
        for _ in 0..5_000 {
            store.tick(&mut rng);
            let h = store.weather().humidity_percent;
            let m = store.soil().moisture_percent;
            assert!((30.0..=90.0).contains(&h), "humidity {h} out of range");
            assert!((20.0..=80.0).contains(&m), "moisture {m} out of range");
        }
    }

    #[test]
    fn tick_clamps_out_of_range_starting_values() {
        let mut rng = StdRng::seed_from_u64(1);
        let weather = WeatherReading {
            humidity_percent: 150.0,
            ..WeatherReading::seed()
        };
        let soil = SoilReading {
            moisture_percent: -40.0,
            ..SoilReading::seed()
        };
        let mut store = TelemetryStore::new(weather, soil);
        store.tick(&mut rng);
        assert_eq!(store.weather().humidity_percent, 90.0);
        assert_eq!(store.soil().moisture_percent, 20.0);
    }

    #[test]
    fn tick_drift_is_bounded() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut store = TelemetryStore::default();
        for _ in 0..500 {
            let before_temp = store.weather().temperature_c;
            let before_hum = store.weather().humidity_percent;
            let before_moist = store.soil().moisture_percent;
            store.tick(&mut rng);
            assert!((store.weather().temperature_c - before_temp).abs() <= 1.0);
            assert!((store.weather().humidity_percent - before_hum).abs() <= 5.0);
            assert!((store.soil().moisture_percent - before_moist).abs() <= 2.5);
        }
    }

    #[test]
    fn tick_leaves_other_fields_untouched() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut store = TelemetryStore::default();
        store.tick(&mut rng);
        let w = store.weather();
        let s = store.soil();
        assert_eq!(w.rainfall_mm, 12.0);
        assert_eq!(w.wind_speed_kmh, 8.0);
        assert_eq!(s.ph, 6.8);
        assert_eq!(s.nitrogen, 85.0);
    }

    #[test]
    fn history_is_bounded_and_ordered() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut store = TelemetryStore::default();
        for _ in 0..(HISTORY_CAPACITY * 2) {
            store.tick(&mut rng);
        }
        let samples: Vec<_> = store.history().collect();
        assert_eq!(samples.len(), HISTORY_CAPACITY);
        assert!(samples
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp));
        let last = samples.last().unwrap();
        assert_eq!(last.moisture_percent, store.soil().moisture_percent);
    }
}
