use super::{
    fertilization::{NitrogenRule, PhosphorusRule},
    irrigation::IrrigationRule,
    pest_control::{FungalRiskRule, InsectActivityRule},
    soil_ph::SoilPhRule,
    Rule,
};
use crate::models::{Recommendation, SoilReading, WeatherReading};

pub struct RulesEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RulesEngine {
    /// Rules in evaluation order. Output order follows this list.
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(IrrigationRule),
            Box::new(NitrogenRule),
            Box::new(PhosphorusRule),
            Box::new(FungalRiskRule),
            Box::new(InsectActivityRule),
            Box::new(SoilPhRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, weather: &WeatherReading, soil: &SoilReading) -> Vec<Recommendation> {
        let recommendations: Vec<Recommendation> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(weather, soil))
            .collect();

        tracing::trace!(count = recommendations.len(), "Rules evaluated");
        recommendations
    }

    pub fn evaluate_rule(
        &self,
        rule_id: &str,
        weather: &WeatherReading,
        soil: &SoilReading,
    ) -> Option<Recommendation> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(weather, soil))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, RecommendationKind};

    fn readings(temp: f64, humidity: f64, moisture: f64) -> (WeatherReading, SoilReading) {
        let weather = WeatherReading {
            temperature_c: temp,
            humidity_percent: humidity,
            ..WeatherReading::seed()
        };
        let soil = SoilReading {
            moisture_percent: moisture,
            ..SoilReading::seed()
        };
        (weather, soil)
    }

    fn irrigation(recs: &[Recommendation]) -> Vec<Priority> {
        recs.iter()
            .filter(|r| r.kind == RecommendationKind::Irrigation)
            .map(|r| r.priority)
            .collect()
    }

    #[test]
    fn seed_readings() {
        let engine = RulesEngine::new();
        let recs = engine.evaluate(&WeatherReading::seed(), &SoilReading::seed());
        let ids: Vec<&str> = recs.iter().map(|r| r.id.as_str()).collect();
        // Moisture 42 → medium irrigation; nutrients and weather are fine
        assert_eq!(ids, vec!["irrigation", "soil_ph"]);
        assert_eq!(recs[0].priority, Priority::Medium);
    }

    #[test]
    fn irrigation_entries_by_moisture_band() {
        let engine = RulesEngine::new();
        let mut m = 0.0;
        while m <= 100.0 {
            let (w, s) = readings(22.0, 50.0, m);
            let recs = engine.evaluate(&w, &s);
            let found = irrigation(&recs);
            if m < 40.0 {
                assert_eq!(found, vec![Priority::High], "moisture {m}");
            } else if m < 50.0 {
                assert_eq!(found, vec![Priority::Medium], "moisture {m}");
            } else {
                assert!(found.is_empty(), "moisture {m}");
            }
            m += 0.5;
        }
    }

    #[test]
    fn ph_advisory_is_always_last() {
        let engine = RulesEngine::new();
        for (t, h, m) in [(10.0, 30.0, 20.0), (30.0, 90.0, 80.0), (22.0, 60.0, 55.0)] {
            let (w, s) = readings(t, h, m);
            let recs = engine.evaluate(&w, &s);
            assert!(!recs.is_empty());
            assert!(recs.len() <= 7);
            let last = recs.last().unwrap();
            assert_eq!(last.kind, RecommendationKind::General);
            assert_eq!(last.priority, Priority::Low);
        }
    }

    #[test]
    fn everything_fires_in_rule_order() {
        let engine = RulesEngine::new();
        let weather = WeatherReading {
            temperature_c: 30.0,
            humidity_percent: 85.0,
            ..WeatherReading::seed()
        };
        let soil = SoilReading {
            moisture_percent: 35.0,
            nitrogen: 50.0,
            phosphorus: 40.0,
            ph: 5.2,
            ..SoilReading::seed()
        };
        let recs = engine.evaluate(&weather, &soil);
        let ids: Vec<&str> = recs.iter().map(|r| r.id.as_str()).collect();
        // Insect rule needs moisture > 60, so it stays quiet while the soil is dry
        assert_eq!(
            ids,
            vec![
                "irrigation",
                "nitrogen_deficiency",
                "phosphorus_supplement",
                "fungal_risk",
                "soil_ph"
            ]
        );
        assert_eq!(recs.last().unwrap().action, "Consider lime application");
    }

    #[test]
    fn warm_wet_conditions_trigger_both_pest_rules() {
        let engine = RulesEngine::new();
        let (w, s) = readings(27.0, 80.0, 70.0);
        let recs = engine.evaluate(&w, &s);
        let pest: Vec<Priority> = recs
            .iter()
            .filter(|r| r.kind == RecommendationKind::PestControl)
            .map(|r| r.priority)
            .collect();
        assert_eq!(pest, vec![Priority::High, Priority::Medium]);
    }

    #[test]
    fn evaluate_single_rule() {
        let engine = RulesEngine::new();
        let (w, s) = readings(22.0, 50.0, 30.0);
        assert!(engine.evaluate_rule("irrigation", &w, &s).is_some());
        assert!(engine.evaluate_rule("nitrogen_deficiency", &w, &s).is_none());
        assert!(engine.evaluate_rule("no_such_rule", &w, &s).is_none());
    }

    #[test]
    fn lists_rules_in_order() {
        let ids: Vec<&str> = RulesEngine::new()
            .list_rules()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "irrigation",
                "nitrogen_deficiency",
                "phosphorus_supplement",
                "fungal_risk",
                "insect_activity",
                "soil_ph"
            ]
        );
    }
}
