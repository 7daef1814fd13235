use super::Rule;
use crate::models::{
    Priority, Recommendation, RecommendationKind, SoilReading, WeatherReading,
};

/// Fungal disease risk rule
///
/// Humidity above 70% with temperatures above 20°C favors fungal pathogens.
pub struct FungalRiskRule;

impl Rule for FungalRiskRule {
    fn id(&self) -> &'static str {
        "fungal_risk"
    }

    fn name(&self) -> &'static str {
        "Fungal Disease Risk"
    }

    fn evaluate(&self, weather: &WeatherReading, _soil: &SoilReading) -> Option<Recommendation> {
        let humidity = weather.humidity_percent;
        let temp = weather.temperature_c;

        if humidity <= 70.0 || temp <= 20.0 {
            return None;
        }

        let rec = Recommendation::new(
            self.id(),
            RecommendationKind::PestControl,
            Priority::High,
            "Fungal Disease Risk Alert",
            "High humidity and warm temperatures create ideal conditions for fungal diseases.",
        )
        .with_action("Apply preventive fungicide and ensure good air circulation")
        .with_timing("Immediate preventive action")
        .with_data_point("Humidity", format!("{}%", humidity.round()))
        .with_data_point("Temperature", format!("{:.1}°C", temp));

        Some(rec)
    }
}

/// Insect activity rule
///
/// Warm (>25°C) and moist (>60%) conditions accelerate insect pest cycles.
pub struct InsectActivityRule;

impl Rule for InsectActivityRule {
    fn id(&self) -> &'static str {
        "insect_activity"
    }

    fn name(&self) -> &'static str {
        "Insect Activity"
    }

    fn evaluate(&self, weather: &WeatherReading, soil: &SoilReading) -> Option<Recommendation> {
        let temp = weather.temperature_c;
        let moisture = soil.moisture_percent;

        if temp <= 25.0 || moisture <= 60.0 {
            return None;
        }

        let rec = Recommendation::new(
            self.id(),
            RecommendationKind::PestControl,
            Priority::Medium,
            "Insect Activity Monitoring",
            "Warm, moist conditions may increase insect pest activity.",
        )
        .with_action("Increase scouting frequency and prepare IPM strategies")
        .with_timing("Ongoing monitoring")
        .with_data_point("Temperature", format!("{:.1}°C", temp))
        .with_data_point("Soil Moisture", format!("{}%", moisture.round()));

        Some(rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(temp: f64, humidity: f64) -> WeatherReading {
        WeatherReading {
            temperature_c: temp,
            humidity_percent: humidity,
            ..WeatherReading::seed()
        }
    }

    #[test]
    fn fungal_risk_needs_both_humidity_and_warmth() {
        let soil = SoilReading::seed();
        assert!(FungalRiskRule.evaluate(&weather(24.0, 65.0), &soil).is_none());
        assert!(FungalRiskRule.evaluate(&weather(18.0, 85.0), &soil).is_none());
        assert!(FungalRiskRule.evaluate(&weather(20.0, 85.0), &soil).is_none());

        let rec = FungalRiskRule.evaluate(&weather(21.0, 71.0), &soil).unwrap();
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.kind, RecommendationKind::PestControl);
    }

    #[test]
    fn insect_activity_needs_heat_and_moisture() {
        let wet = SoilReading {
            moisture_percent: 65.0,
            ..SoilReading::seed()
        };
        assert!(InsectActivityRule
            .evaluate(&weather(24.0, 50.0), &wet)
            .is_none());
        assert!(InsectActivityRule
            .evaluate(&weather(30.0, 50.0), &SoilReading::seed())
            .is_none());

        let rec = InsectActivityRule
            .evaluate(&weather(26.0, 50.0), &wet)
            .unwrap();
        assert_eq!(rec.priority, Priority::Medium);
        assert_eq!(rec.timing, "Ongoing monitoring");
    }
}
