pub mod analysis;
pub mod dashboard;
pub mod monitoring;
pub mod prediction;
pub mod recommendations;
pub mod settings;

pub use analysis::AnalysisScreen;
pub use dashboard::DashboardScreen;
pub use monitoring::MonitoringScreen;
pub use prediction::PredictionScreen;
pub use recommendations::RecommendationsScreen;
pub use settings::SettingsScreen;
