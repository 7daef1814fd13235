use super::Rule;
use crate::models::{
    Priority, Recommendation, RecommendationKind, SoilReading, WeatherReading,
};

/// Soil pH advisory
///
/// Always reported. Most field crops prefer pH 6.0-7.0; acidic soils
/// below 6.0 get a liming suggestion.
pub struct SoilPhRule;

impl Rule for SoilPhRule {
    fn id(&self) -> &'static str {
        "soil_ph"
    }

    fn name(&self) -> &'static str {
        "Soil pH Optimization"
    }

    fn evaluate(&self, _weather: &WeatherReading, soil: &SoilReading) -> Option<Recommendation> {
        let action = if soil.ph < 6.0 {
            "Consider lime application"
        } else {
            "pH levels are optimal"
        };

        let rec = Recommendation::new(
            self.id(),
            RecommendationKind::General,
            Priority::Low,
            "Soil pH Optimization",
            format!(
                "Current pH is {}. Most crops prefer 6.0-7.0 range.",
                soil.ph
            ),
        )
        .with_action(action)
        .with_timing("During off-season")
        .with_data_point("pH", format!("{:.1}", soil.ph))
        .with_data_point("Organic Matter", format!("{:.1}%", soil.organic_matter));

        Some(rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_fires() {
        let rec = SoilPhRule
            .evaluate(&WeatherReading::seed(), &SoilReading::seed())
            .unwrap();
        assert_eq!(rec.priority, Priority::Low);
        assert_eq!(rec.kind, RecommendationKind::General);
        assert_eq!(rec.description, "Current pH is 6.8. Most crops prefer 6.0-7.0 range.");
        assert_eq!(rec.action, "pH levels are optimal");
    }

    #[test]
    fn acidic_soil_suggests_lime() {
        let soil = SoilReading {
            ph: 5.5,
            ..SoilReading::seed()
        };
        let rec = SoilPhRule.evaluate(&WeatherReading::seed(), &soil).unwrap();
        assert_eq!(rec.action, "Consider lime application");
    }
}
