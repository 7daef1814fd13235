use super::Rule;
use crate::models::{
    Priority, Recommendation, RecommendationKind, SoilReading, WeatherReading,
};

/// Irrigation rule
///
/// Fires at most once per evaluation:
/// - Soil moisture <40% → irrigate within 24 hours (high)
/// - Soil moisture 40-50% → prepare to irrigate within 48 hours (medium)
pub struct IrrigationRule;

const CRITICAL_MOISTURE: f64 = 40.0;
const LOW_MOISTURE: f64 = 50.0;

impl Rule for IrrigationRule {
    fn id(&self) -> &'static str {
        "irrigation"
    }

    fn name(&self) -> &'static str {
        "Irrigation Need"
    }

    fn evaluate(&self, weather: &WeatherReading, soil: &SoilReading) -> Option<Recommendation> {
        let moisture = soil.moisture_percent;

        let rec = if moisture < CRITICAL_MOISTURE {
            Recommendation::new(
                self.id(),
                RecommendationKind::Irrigation,
                Priority::High,
                "Immediate Irrigation Required",
                format!(
                    "Soil moisture is at {}%, which is below the optimal range for most crops.",
                    moisture.round()
                ),
            )
            .with_action("Apply 0.5-0.75 inches of water uniformly across the field")
            .with_timing("Within 24 hours")
        } else if moisture < LOW_MOISTURE {
            Recommendation::new(
                self.id(),
                RecommendationKind::Irrigation,
                Priority::Medium,
                "Monitor Irrigation Needs",
                "Soil moisture is approaching critical levels. Monitor closely.",
            )
            .with_action("Prepare irrigation system and check weather forecast")
            .with_timing("Within 48 hours")
        } else {
            return None;
        };

        Some(
            rec.with_data_point("Soil Moisture", format!("{}%", moisture.round()))
                .with_data_point(
                    "Forecast Rain (5 days)",
                    format!("{} mm", weather.forecast_rain_total_mm().round()),
                ),
        )
    }
}
