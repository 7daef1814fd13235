use super::farm_profile::Crop;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionFactors {
    pub weather: u32,
    pub soil: u32,
    pub practices: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldPrediction {
    /// Crop name as requested; names outside the crop table are kept verbatim.
    pub crop: String,
    /// Tons per acre, rounded to one decimal.
    pub expected_yield: f64,
    pub confidence: u8,
    pub factors: PredictionFactors,
}

impl YieldPrediction {
    /// Whole tons expected across a field of the given size.
    pub fn total_yield(&self, field_size_acres: f64) -> f64 {
        (self.expected_yield * field_size_acres).round()
    }
}

/// Inputs the prediction form collects. The estimate only runs once all are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionRequest {
    pub crop: Option<Crop>,
    pub planting_date: Option<NaiveDate>,
    pub field_size_acres: Option<f64>,
}

impl PredictionRequest {
    pub fn is_complete(&self) -> bool {
        self.ready().is_some()
    }

    /// The complete set of inputs, if every field is filled in.
    pub fn ready(&self) -> Option<(Crop, NaiveDate, f64)> {
        let size = self.field_size_acres.filter(|s| s.is_finite() && *s > 0.0)?;
        Some((self.crop?, self.planting_date?, size))
    }

    pub fn set_planting_date(&mut self, value: &str) {
        self.planting_date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok();
    }

    pub fn set_field_size(&mut self, value: &str) {
        self.field_size_acres = value.trim().parse().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_prediction() -> YieldPrediction {
        YieldPrediction {
            crop: "Wheat".into(),
            expected_yield: 4.1,
            confidence: 91,
            factors: PredictionFactors {
                weather: 100,
                soil: 91,
                practices: 100,
            },
        }
    }

    #[test]
    fn total_yield_rounds_to_whole_tons() {
        let p = sample_prediction();
        assert_eq!(p.total_yield(150.0), 615.0);
        assert_eq!(p.total_yield(0.3), 1.0);
        assert_eq!(p.total_yield(0.0), 0.0);
    }

    #[test]
    fn request_requires_all_three_inputs() {
        let mut req = PredictionRequest::default();
        assert!(!req.is_complete());

        req.crop = Some(Crop::Corn);
        assert!(!req.is_complete());

        req.set_planting_date("2024-04-15");
        assert!(!req.is_complete());

        req.set_field_size("25");
        assert!(req.is_complete());

        let (crop, date, size) = req.ready().unwrap();
        assert_eq!(crop, Crop::Corn);
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 4, 15).unwrap());
        assert_eq!(size, 25.0);
    }

    #[test]
    fn request_rejects_malformed_inputs() {
        let mut req = PredictionRequest {
            crop: Some(Crop::Wheat),
            ..Default::default()
        };
        req.set_planting_date("15/04/2024");
        assert!(req.planting_date.is_none());

        req.set_planting_date("2024-04-15");
        req.set_field_size("0");
        assert!(!req.is_complete());

        req.set_field_size("many");
        assert!(req.field_size_acres.is_none());
    }
}
