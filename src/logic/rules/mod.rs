pub mod engine;
pub mod fertilization;
pub mod irrigation;
pub mod pest_control;
pub mod soil_ph;

pub use engine::RulesEngine;

use crate::models::{Recommendation, SoilReading, WeatherReading};

/// Trait for agronomic rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return a recommendation if conditions are met
    fn evaluate(&self, weather: &WeatherReading, soil: &SoilReading) -> Option<Recommendation>;
}
