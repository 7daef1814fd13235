use super::calculations::{clamp_min, round1};
use crate::models::{Crop, PredictionFactors, SoilReading, WeatherReading, YieldPrediction};
use rand::Rng;

/// Base yield used for crops outside the crop table (tons/acre).
pub const DEFAULT_BASE_YIELD: f64 = 4.0;

/// Floor applied to each environmental impact factor.
const MIN_IMPACT: f64 = 0.7;

/// Range of the farming-practices multiplier. It is a placeholder for
/// agronomic factors the estimator does not model and carries no meaning
/// beyond bounded noise.
pub const PRACTICES_RANGE: (f64, f64) = (0.9, 1.1);

pub fn base_yield(crop: &str) -> f64 {
    Crop::from_str(crop)
        .map(|c| c.base_yield())
        .unwrap_or(DEFAULT_BASE_YIELD)
}

fn is_paddy(crop: &str) -> bool {
    Crop::from_str(crop).is_some_and(|c| c.is_paddy())
}

pub fn optimal_temperature(crop: &str) -> f64 {
    if is_paddy(crop) {
        28.0
    } else {
        22.0
    }
}

pub fn optimal_moisture(crop: &str) -> f64 {
    if is_paddy(crop) {
        80.0
    } else {
        60.0
    }
}

pub fn weather_impact(crop: &str, weather: &WeatherReading) -> f64 {
    let temp_diff = (weather.temperature_c - optimal_temperature(crop)).abs();
    clamp_min(1.0 - temp_diff * 0.05, MIN_IMPACT)
}

pub fn moisture_impact(crop: &str, soil: &SoilReading) -> f64 {
    let moisture_diff = (soil.moisture_percent - optimal_moisture(crop)).abs();
    clamp_min(1.0 - moisture_diff * 0.01, MIN_IMPACT)
}

/// Mean of nutrient health and moisture fit, held within [0.7, 1.0].
pub fn soil_impact(crop: &str, soil: &SoilReading) -> f64 {
    ((soil.health_score() + moisture_impact(crop, soil)) / 2.0).clamp(MIN_IMPACT, 1.0)
}

pub fn draw_practices_impact<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let (low, high) = PRACTICES_RANGE;
    low + rng.random_range(0.0..=(high - low))
}

pub fn confidence(crop: &str, weather: &WeatherReading, soil: &SoilReading) -> u8 {
    let temp_diff = (weather.temperature_c - optimal_temperature(crop)).abs();
    let raw = 85.0 + soil.health_score() * 10.0 - temp_diff * 2.0;
    raw.clamp(70.0, 95.0).round() as u8
}

/// Estimate yield with a practices multiplier drawn from `rng`.
pub fn estimate_yield<R: Rng + ?Sized>(
    crop: &str,
    weather: &WeatherReading,
    soil: &SoilReading,
    rng: &mut R,
) -> YieldPrediction {
    let practices = draw_practices_impact(rng);
    estimate_with_practices(crop, weather, soil, practices)
}

/// Deterministic core of the estimate for a known practices multiplier.
pub fn estimate_with_practices(
    crop: &str,
    weather: &WeatherReading,
    soil: &SoilReading,
    practices_impact: f64,
) -> YieldPrediction {
    let weather_impact = weather_impact(crop, weather);
    let soil_impact = soil_impact(crop, soil);
    let expected = base_yield(crop) * weather_impact * soil_impact * practices_impact;

    let prediction = YieldPrediction {
        crop: crop.trim().to_string(),
        expected_yield: round1(expected),
        confidence: confidence(crop, weather, soil),
        factors: PredictionFactors {
            weather: (weather_impact * 100.0).round() as u32,
            soil: (soil_impact * 100.0).round() as u32,
            practices: (practices_impact * 100.0).round() as u32,
        },
    };

    tracing::debug!(
        crop = %prediction.crop,
        expected_yield = prediction.expected_yield,
        confidence = prediction.confidence,
        "Yield estimated"
    );

    prediction
}
