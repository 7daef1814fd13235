use super::Rule;
use crate::models::{
    Priority, Recommendation, RecommendationKind, SoilReading, WeatherReading,
};

/// Nitrogen deficiency rule
///
/// Nitrogen below 70% of optimal limits vegetative growth.
pub struct NitrogenRule;

impl Rule for NitrogenRule {
    fn id(&self) -> &'static str {
        "nitrogen_deficiency"
    }

    fn name(&self) -> &'static str {
        "Nitrogen Deficiency"
    }

    fn evaluate(&self, _weather: &WeatherReading, soil: &SoilReading) -> Option<Recommendation> {
        if soil.nitrogen >= 70.0 {
            return None;
        }

        let rec = Recommendation::new(
            self.id(),
            RecommendationKind::Fertilization,
            Priority::High,
            "Nitrogen Deficiency Detected",
            format!(
                "Nitrogen levels at {}% of optimal. This may limit crop growth.",
                soil.nitrogen.round()
            ),
        )
        .with_action("Apply nitrogen fertilizer (urea or ammonium nitrate)")
        .with_timing("Before next growth phase")
        .with_data_point("Nitrogen", format!("{}%", soil.nitrogen.round()));

        Some(rec)
    }
}

/// Phosphorus supplement rule
pub struct PhosphorusRule;

impl Rule for PhosphorusRule {
    fn id(&self) -> &'static str {
        "phosphorus_supplement"
    }

    fn name(&self) -> &'static str {
        "Phosphorus Supplement"
    }

    fn evaluate(&self, _weather: &WeatherReading, soil: &SoilReading) -> Option<Recommendation> {
        if soil.phosphorus >= 60.0 {
            return None;
        }

        let rec = Recommendation::new(
            self.id(),
            RecommendationKind::Fertilization,
            Priority::Medium,
            "Phosphorus Supplement Needed",
            format!(
                "Phosphorus levels are at {}%. Consider supplementation.",
                soil.phosphorus.round()
            ),
        )
        .with_action("Apply phosphate fertilizer (DAP or MAP)")
        .with_timing("Within 2 weeks")
        .with_data_point("Phosphorus", format!("{}%", soil.phosphorus.round()));

        Some(rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nitrogen_threshold() {
        let weather = WeatherReading::seed();
        let mut soil = SoilReading::seed();
        assert!(NitrogenRule.evaluate(&weather, &soil).is_none());

        soil.nitrogen = 69.6;
        let rec = NitrogenRule.evaluate(&weather, &soil).unwrap();
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.kind, RecommendationKind::Fertilization);
        assert!(rec.description.starts_with("Nitrogen levels at 70%"));

        soil.nitrogen = 70.0;
        assert!(NitrogenRule.evaluate(&weather, &soil).is_none());
    }

    #[test]
    fn phosphorus_threshold() {
        let weather = WeatherReading::seed();
        let mut soil = SoilReading::seed();
        assert!(PhosphorusRule.evaluate(&weather, &soil).is_none());

        soil.phosphorus = 55.0;
        let rec = PhosphorusRule.evaluate(&weather, &soil).unwrap();
        assert_eq!(rec.priority, Priority::Medium);
        assert_eq!(rec.timing, "Within 2 weeks");
    }

    #[test]
    fn half_percent_nitrogen_rounds_up() {
        let weather = WeatherReading::seed();
        let mut soil = SoilReading::seed();
        soil.nitrogen = 62.5;
        let rec = NitrogenRule.evaluate(&weather, &soil).unwrap();
        assert!(rec.description.starts_with("Nitrogen levels at 63%"));
        assert_eq!(rec.data_points[0].value, "63%");
    }
}
