use serde::{Deserialize, Serialize};

/// Lower and upper bound soil moisture is held to after every telemetry update.
pub const MOISTURE_RANGE: (f64, f64) = (20.0, 80.0);

/// Soil readings. Nutrient values are "percent of optimal" and may exceed 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilReading {
    pub moisture_percent: f64,
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub organic_matter: f64,
}

impl SoilReading {
    pub fn seed() -> Self {
        Self {
            moisture_percent: 42.0,
            ph: 6.8,
            nitrogen: 85.0,
            phosphorus: 72.0,
            potassium: 90.0,
            organic_matter: 3.2,
        }
    }

    /// Average of the N-P-K readings normalized so 1.0 means all three at optimum.
    pub fn health_score(&self) -> f64 {
        (self.nitrogen + self.phosphorus + self.potassium) / 300.0
    }

    pub fn ph_in_preferred_range(&self) -> bool {
        (6.0..=7.0).contains(&self.ph)
    }
}

impl Default for SoilReading {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_score_of_seed_reading() {
        let soil = SoilReading::seed();
        assert!((soil.health_score() - 247.0 / 300.0).abs() < 1e-9);
    }

    #[test]
    fn health_score_can_exceed_one() {
        let soil = SoilReading {
            nitrogen: 120.0,
            phosphorus: 110.0,
            potassium: 100.0,
            ..SoilReading::seed()
        };
        assert!(soil.health_score() > 1.0);
    }

    #[test]
    fn preferred_ph_range() {
        let mut soil = SoilReading::seed();
        assert!(soil.ph_in_preferred_range());
        soil.ph = 5.4;
        assert!(!soil.ph_in_preferred_range());
    }
}
