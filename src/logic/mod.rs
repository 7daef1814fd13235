pub mod calculations;
pub mod history;
pub mod rules;
pub mod telemetry;
pub mod timers;
pub mod yield_estimator;

pub use history::HistoricalAggregator;
pub use rules::RulesEngine;
pub use telemetry::TelemetryStore;
pub use timers::{PendingPrediction, TelemetryTimer};
