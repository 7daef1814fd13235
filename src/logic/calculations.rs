use crate::logic::telemetry::TelemetrySample;

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Lower-bound a value (`max(value, floor)`)
pub fn clamp_min(value: f64, floor: f64) -> f64 {
    if value < floor {
        floor
    } else {
        value
    }
}

/// Percent change from `previous` to `current`, None when `previous` is zero
pub fn percent_change(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        None
    } else {
        Some((current - previous) / previous * 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Temperature,
    Humidity,
    SoilMoisture,
}

impl Metric {
    pub fn value(&self, sample: &TelemetrySample) -> f64 {
        match self {
            Metric::Temperature => sample.temperature_c,
            Metric::Humidity => sample.humidity_percent,
            Metric::SoilMoisture => sample.moisture_percent,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Metric::Temperature => Metric::Humidity,
            Metric::Humidity => Metric::SoilMoisture,
            Metric::SoilMoisture => Metric::Temperature,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub latest: f64,
}

/// Min, max, mean and latest value of a metric over the samples
pub fn series_stats<'a>(
    samples: impl IntoIterator<Item = &'a TelemetrySample>,
    metric: Metric,
) -> Option<SeriesStats> {
    let values: Vec<f64> = samples.into_iter().map(|s| metric.value(s)).collect();
    let latest = *values.last()?;

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let average = values.iter().sum::<f64>() / values.len() as f64;

    Some(SeriesStats {
        min,
        max,
        average,
        latest,
    })
}

/// Scale samples of a metric into sparkline heights between 1 and 100
pub fn sparkline_points<'a>(
    samples: impl IntoIterator<Item = &'a TelemetrySample>,
    metric: Metric,
) -> Vec<u64> {
    let values: Vec<f64> = samples.into_iter().map(|s| metric.value(s)).collect();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    values
        .iter()
        .map(|v| {
            if span <= f64::EPSILON {
                50
            } else {
                (((v - min) / span) * 99.0).round() as u64 + 1
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(temp: f64, humidity: f64, moisture: f64) -> TelemetrySample {
        TelemetrySample {
            timestamp: Utc::now(),
            temperature_c: temp,
            humidity_percent: humidity,
            moisture_percent: moisture,
        }
    }

    #[test]
    fn round1_known_values() {
        assert_eq!(round1(4.1025), 4.1);
        assert_eq!(round1(6.7567), 6.8);
        assert_eq!(round1(-3.7974), -3.8);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn clamp_min_floors() {
        assert_eq!(clamp_min(0.5, 0.7), 0.7);
        assert_eq!(clamp_min(0.9, 0.7), 0.9);
    }

    #[test]
    fn percent_change_handles_zero_base() {
        assert!((percent_change(14.8, 15.8).unwrap() - 6.7567).abs() < 1e-3);
        assert_eq!(percent_change(0.0, 5.0), None);
    }

    #[test]
    fn series_stats_over_samples() {
        let samples = vec![
            sample(20.0, 50.0, 40.0),
            sample(24.0, 60.0, 42.0),
            sample(22.0, 70.0, 44.0),
        ];
        let stats = series_stats(&samples, Metric::Temperature).unwrap();
        assert_eq!(stats.min, 20.0);
        assert_eq!(stats.max, 24.0);
        assert_eq!(stats.average, 22.0);
        assert_eq!(stats.latest, 22.0);

        let moisture = series_stats(&samples, Metric::SoilMoisture).unwrap();
        assert_eq!(moisture.latest, 44.0);

        assert!(series_stats(&[], Metric::Humidity).is_none());
    }

    #[test]
    fn sparkline_scales_between_bounds() {
        let samples = vec![
            sample(10.0, 0.0, 0.0),
            sample(15.0, 0.0, 0.0),
            sample(20.0, 0.0, 0.0),
        ];
        assert_eq!(
            sparkline_points(&samples, Metric::Temperature),
            vec![1, 51, 100]
        );
        // Flat series sit mid-height
        assert_eq!(sparkline_points(&samples, Metric::Humidity), vec![50, 50, 50]);
    }

    #[test]
    fn metric_cycles() {
        assert_eq!(Metric::Temperature.next(), Metric::Humidity);
        assert_eq!(Metric::SoilMoisture.next(), Metric::Temperature);
    }
}
