use crate::config::Config;
use crate::error::Result;
use crate::i18n::{self, Language, StringId};
use crate::logic::calculations::Metric;
use crate::logic::yield_estimator;
use crate::logic::{HistoricalAggregator, PendingPrediction, RulesEngine, TelemetryStore};
use crate::models::{
    Crop, CropFilter, FarmProfile, NotificationKind, NotificationPrefs, Priority,
    PredictionRequest, Recommendation, TemperatureUnit, YieldPrediction,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Predictions kept for the dashboard's recent list.
const RECENT_PREDICTIONS: usize = 5;

/// Forecast rain over the coming days that raises a weather alert (mm).
const RAIN_ALERT_MM: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Prediction,
    Recommendations,
    Monitoring,
    Analysis,
    Settings,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::Dashboard),
            '2' => Some(Screen::Prediction),
            '3' => Some(Screen::Recommendations),
            '4' => Some(Screen::Monitoring),
            '5' => Some(Screen::Analysis),
            's' | 'S' => Some(Screen::Settings),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionField {
    Crop,
    PlantingDate,
    FieldSize,
}

impl PredictionField {
    pub fn all() -> &'static [PredictionField] {
        &[
            PredictionField::Crop,
            PredictionField::PlantingDate,
            PredictionField::FieldSize,
        ]
    }

    pub fn label(&self) -> StringId {
        match self {
            PredictionField::Crop => StringId::SelectCrop,
            PredictionField::PlantingDate => StringId::PlantingDate,
            PredictionField::FieldSize => StringId::FieldSize,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            PredictionField::Crop => PredictionField::PlantingDate,
            PredictionField::PlantingDate => PredictionField::FieldSize,
            PredictionField::FieldSize => PredictionField::Crop,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            PredictionField::Crop => PredictionField::FieldSize,
            PredictionField::PlantingDate => PredictionField::Crop,
            PredictionField::FieldSize => PredictionField::PlantingDate,
        }
    }
}

/// A revealed prediction together with the field size it was requested for.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub prediction: YieldPrediction,
    pub field_size_acres: f64,
}

impl PredictionOutcome {
    pub fn total_yield(&self) -> f64 {
        self.prediction.total_yield(self.field_size_acres)
    }
}

pub struct PredictionState {
    pub request: PredictionRequest,
    pub focused_field: PredictionField,
    pub editing: bool,
    pub edit_buffer: String,
    pub result: Option<PredictionOutcome>,
    pending: Option<(PendingPrediction, f64)>,
}

impl PredictionState {
    pub fn new() -> Self {
        Self {
            request: PredictionRequest::default(),
            focused_field: PredictionField::Crop,
            editing: false,
            edit_buffer: String::new(),
            result: None,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Step the crop selection through the crop list.
    pub fn cycle_crop(&mut self, forward: bool) {
        let len = Crop::ALL.len();
        let idx = match self.request.crop {
            Some(crop) => {
                let current = Crop::ALL.iter().position(|c| *c == crop).unwrap_or(0);
                if forward {
                    (current + 1) % len
                } else {
                    (current + len - 1) % len
                }
            }
            None if forward => 0,
            None => len - 1,
        };
        self.request.crop = Some(Crop::ALL[idx]);
    }

    pub fn field_value(&self, field: PredictionField) -> String {
        match field {
            PredictionField::Crop => self
                .request
                .crop
                .map(|c| c.to_string())
                .unwrap_or_default(),
            PredictionField::PlantingDate => self
                .request
                .planting_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            PredictionField::FieldSize => self
                .request
                .field_size_acres
                .map(|s| s.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
        self.edit_buffer = self.field_value(self.focused_field);
    }

    pub fn cancel_editing(&mut self) {
        self.editing = false;
        self.edit_buffer.clear();
    }

    pub fn finish_editing(&mut self) {
        self.editing = false;
        let value = std::mem::take(&mut self.edit_buffer);
        match self.focused_field {
            PredictionField::Crop => {
                if let Some(crop) = Crop::from_str(&value) {
                    self.request.crop = Some(crop);
                }
            }
            PredictionField::PlantingDate => self.request.set_planting_date(&value),
            PredictionField::FieldSize => self.request.set_field_size(&value),
        }
    }

    fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some((pending, _)) => {
                pending.cancel();
                true
            }
            None => false,
        }
    }
}

impl Default for PredictionState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RecommendationsState {
    pub selected_index: usize,
}

impl RecommendationsState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Keep the selection inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }
}

pub struct MonitoringState {
    pub metric: Metric,
}

impl MonitoringState {
    pub fn new() -> Self {
        Self {
            metric: Metric::Temperature,
        }
    }

    pub fn cycle_metric(&mut self) {
        self.metric = self.metric.next();
    }
}

pub struct AnalysisState {
    /// Index into `HistoricalAggregator::years()` (newest first)
    pub year_index: usize,
    pub crop_filter: CropFilter,
}

impl AnalysisState {
    pub fn new() -> Self {
        Self {
            year_index: 0,
            crop_filter: CropFilter::All,
        }
    }

    pub fn older(&mut self, year_count: usize) {
        if year_count > 0 && self.year_index < year_count - 1 {
            self.year_index += 1;
        }
    }

    pub fn newer(&mut self) {
        if self.year_index > 0 {
            self.year_index -= 1;
        }
    }

    pub fn cycle_crop(&mut self) {
        self.crop_filter = self.crop_filter.next();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Name,
    Location,
    Size,
    Crops,
    Language,
    TemperatureUnit,
    Notifications,
}

impl SettingsField {
    pub fn all() -> &'static [SettingsField] {
        &[
            SettingsField::Name,
            SettingsField::Location,
            SettingsField::Size,
            SettingsField::Crops,
            SettingsField::Language,
            SettingsField::TemperatureUnit,
            SettingsField::Notifications,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::Name => "Farm Name",
            SettingsField::Location => "Location",
            SettingsField::Size => "Farm Size (acres)",
            SettingsField::Crops => "Crops",
            SettingsField::Language => "Language",
            SettingsField::TemperatureUnit => "Temperature Unit",
            SettingsField::Notifications => "Notifications",
        }
    }

    /// Fields edited through the text buffer; the rest cycle in place.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            SettingsField::Name | SettingsField::Location | SettingsField::Size
        )
    }

    pub fn next(&self) -> Self {
        match self {
            SettingsField::Name => SettingsField::Location,
            SettingsField::Location => SettingsField::Size,
            SettingsField::Size => SettingsField::Crops,
            SettingsField::Crops => SettingsField::Language,
            SettingsField::Language => SettingsField::TemperatureUnit,
            SettingsField::TemperatureUnit => SettingsField::Notifications,
            SettingsField::Notifications => SettingsField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            SettingsField::Name => SettingsField::Notifications,
            SettingsField::Location => SettingsField::Name,
            SettingsField::Size => SettingsField::Location,
            SettingsField::Crops => SettingsField::Size,
            SettingsField::Language => SettingsField::Crops,
            SettingsField::TemperatureUnit => SettingsField::Language,
            SettingsField::Notifications => SettingsField::TemperatureUnit,
        }
    }
}

pub struct SettingsState {
    pub focused_field: SettingsField,
    pub editing: bool,
    pub edit_buffer: String,
    /// Cursor into `Crop::ALL` while the crops field is focused
    pub crop_cursor: usize,
    /// Cursor into `NotificationKind::ALL`
    pub notification_cursor: usize,
    /// Farm profile edits not yet saved. Present while the settings view is open.
    pub draft: Option<FarmProfile>,
}

impl SettingsState {
    pub fn new() -> Self {
        Self {
            focused_field: SettingsField::Name,
            editing: false,
            edit_buffer: String::new(),
            crop_cursor: 0,
            notification_cursor: 0,
            draft: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn start_editing(&mut self, current_value: &str) {
        self.editing = true;
        self.edit_buffer = current_value.to_string();
    }

    pub fn cancel_editing(&mut self) {
        self.editing = false;
        self.edit_buffer.clear();
    }

    pub fn finish_editing(&mut self) -> String {
        self.editing = false;
        std::mem::take(&mut self.edit_buffer)
    }

    pub fn move_crop_cursor(&mut self, forward: bool) {
        let len = Crop::ALL.len();
        self.crop_cursor = if forward {
            (self.crop_cursor + 1) % len
        } else {
            (self.crop_cursor + len - 1) % len
        };
    }

    pub fn move_notification_cursor(&mut self, forward: bool) {
        let len = NotificationKind::ALL.len();
        self.notification_cursor = if forward {
            (self.notification_cursor + 1) % len
        } else {
            (self.notification_cursor + len - 1) % len
        };
    }
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,

    // Data
    pub telemetry: TelemetryStore,
    pub farm: FarmProfile,
    pub recommendations: Vec<Recommendation>,
    pub recent_predictions: Vec<PredictionOutcome>,
    pub language: Language,
    pub temperature_unit: TemperatureUnit,
    pub notifications: NotificationPrefs,

    // Screen states
    pub prediction_state: PredictionState,
    pub recommendations_state: RecommendationsState,
    pub monitoring_state: MonitoringState,
    pub analysis_state: AnalysisState,
    pub settings_state: SettingsState,

    // Services
    pub rules_engine: RulesEngine,
    pub history: HistoricalAggregator,
    rng: StdRng,
    prediction_delay: Duration,

    // UI state
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let rng = match config.telemetry.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut app = Self {
            screen: Screen::Dashboard,
            should_quit: false,
            telemetry: TelemetryStore::default(),
            farm: config.farm.to_profile(),
            recommendations: Vec::new(),
            recent_predictions: Vec::new(),
            language: config.display.language,
            temperature_unit: config.display.temperature_unit,
            notifications: config.notifications,
            prediction_state: PredictionState::new(),
            recommendations_state: RecommendationsState::new(),
            monitoring_state: MonitoringState::new(),
            analysis_state: AnalysisState::new(),
            settings_state: SettingsState::new(),
            rules_engine: RulesEngine::new(),
            history: HistoricalAggregator::new(),
            rng,
            prediction_delay: config.prediction.delay(),
            status_message: None,
        };
        app.evaluate_rules();
        app
    }

    pub fn text(&self, id: StringId) -> &'static str {
        i18n::text(self.language, id)
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        if self.screen == Screen::Prediction && screen != Screen::Prediction {
            self.cancel_prediction();
        }
        if self.screen == Screen::Settings && screen != Screen::Settings {
            self.close_settings();
        }
        if screen == Screen::Settings && self.settings_state.draft.is_none() {
            self.settings_state.draft = Some(self.farm.clone());
        }
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.cancel_prediction();
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Apply `count` telemetry ticks, then re-run the rules against the new readings.
    pub fn apply_ticks(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        for _ in 0..count {
            self.telemetry.tick(&mut self.rng);
        }
        self.evaluate_rules();
        tracing::debug!(
            ticks = count,
            recommendations = self.recommendations.len(),
            "Telemetry ticks applied"
        );
    }

    pub fn evaluate_rules(&mut self) {
        self.recommendations = self
            .rules_engine
            .evaluate(self.telemetry.weather(), self.telemetry.soil());
        self.recommendations_state.clamp(self.recommendations.len());
    }

    /// Medium and high priority items the notification settings allow,
    /// as the dashboard lists them.
    pub fn urgent_recommendations(&self) -> Vec<&Recommendation> {
        self.recommendations
            .iter()
            .filter(|r| r.priority >= Priority::Medium && self.notifications.allows(r.kind))
            .collect()
    }

    /// Upcoming-rain alert for the dashboard, if weather alerts are on.
    pub fn weather_alert(&self) -> Option<String> {
        if !self.notifications.weather_alerts {
            return None;
        }
        let rain = self.telemetry.weather().forecast_rain_total_mm();
        (rain >= RAIN_ALERT_MM)
            .then(|| format!("{}: {:.0} mm", self.text(StringId::RainExpected), rain))
    }

    /// Start a prediction if every input is filled in. The result is computed
    /// now against the current readings and revealed once the delay elapses.
    pub fn request_prediction(&mut self) -> bool {
        let Some((crop, planting_date, field_size)) = self.prediction_state.request.ready() else {
            let message = self.text(StringId::FillAllFields);
            self.set_status(message);
            return false;
        };

        self.prediction_state.cancel_pending();
        self.prediction_state.result = None;

        let prediction = yield_estimator::estimate_yield(
            crop.as_str(),
            self.telemetry.weather(),
            self.telemetry.soil(),
            &mut self.rng,
        );
        let pending = PendingPrediction::spawn(prediction, self.prediction_delay);
        self.prediction_state.pending = Some((pending, field_size));

        tracing::info!(crop = %crop, %planting_date, field_size, "Prediction requested");
        let loading = self.text(StringId::Loading);
        self.set_status(loading);
        true
    }

    /// Collect a prediction whose delay has elapsed.
    pub fn poll_prediction(&mut self) {
        let Some((pending, field_size)) = self.prediction_state.pending.as_mut() else {
            return;
        };
        let field_size = *field_size;
        let Some(prediction) = pending.try_take() else {
            return;
        };
        self.prediction_state.pending = None;

        tracing::info!(
            crop = %prediction.crop,
            expected_yield = prediction.expected_yield,
            "Prediction completed"
        );

        let outcome = PredictionOutcome {
            prediction,
            field_size_acres: field_size,
        };
        self.recent_predictions.insert(0, outcome.clone());
        self.recent_predictions.truncate(RECENT_PREDICTIONS);
        self.prediction_state.result = Some(outcome);
        self.clear_status();
    }

    pub fn cancel_prediction(&mut self) {
        if self.prediction_state.cancel_pending() {
            tracing::info!("Prediction cancelled");
            self.clear_status();
        }
    }

    /// The farm profile as the settings view shows it: the draft when one is open.
    pub fn settings_farm(&self) -> &FarmProfile {
        self.settings_state.draft.as_ref().unwrap_or(&self.farm)
    }

    pub fn has_unsaved_settings(&self) -> bool {
        self.settings_state
            .draft
            .as_ref()
            .is_some_and(|draft| *draft != self.farm)
    }

    fn draft_mut(&mut self) -> &mut FarmProfile {
        self.settings_state
            .draft
            .get_or_insert_with(|| self.farm.clone())
    }

    /// Commit the draft farm profile.
    pub fn save_settings(&mut self) {
        if let Some(draft) = &self.settings_state.draft {
            self.farm = draft.clone();
            tracing::info!(farm = %self.farm.name, crops = %self.farm.crop_list(), "Settings saved");
        }
        let message = self.text(StringId::SettingsSaved);
        self.set_status(message);
    }

    /// Throw away unsaved farm profile edits.
    pub fn discard_settings(&mut self) {
        self.settings_state.cancel_editing();
        self.settings_state.draft = Some(self.farm.clone());
        let message = self.text(StringId::ChangesDiscarded);
        self.set_status(message);
    }

    fn close_settings(&mut self) {
        if self.has_unsaved_settings() {
            tracing::debug!("Discarding unsaved settings on leaving the view");
        }
        self.settings_state.cancel_editing();
        self.settings_state.draft = None;
        self.clear_status();
    }

    pub fn settings_value(&self, field: SettingsField) -> String {
        let farm = self.settings_farm();
        match field {
            SettingsField::Name => farm.name.clone(),
            SettingsField::Location => farm.location.clone(),
            SettingsField::Size => format!("{}", farm.size_acres),
            SettingsField::Crops => farm.crop_list(),
            SettingsField::Language => self.language.native_name().to_string(),
            SettingsField::TemperatureUnit => self.temperature_unit.symbol().to_string(),
            SettingsField::Notifications => NotificationKind::ALL
                .iter()
                .filter(|kind| self.notifications.is_enabled(**kind))
                .map(|kind| self.text(kind.label()))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Apply an edited text value. Farm fields go to the draft until saved.
    /// Empty names are ignored; bad sizes are rejected.
    pub fn apply_setting(&mut self, field: SettingsField, value: &str) -> Result<()> {
        let value = value.trim();
        match field {
            SettingsField::Name => {
                if !value.is_empty() {
                    self.draft_mut().name = value.to_string();
                }
            }
            SettingsField::Location => {
                if !value.is_empty() {
                    self.draft_mut().location = value.to_string();
                }
            }
            SettingsField::Size => self.draft_mut().set_size(value)?,
            SettingsField::Crops => {
                if let Some(crop) = Crop::from_str(value) {
                    self.draft_mut().toggle_crop(crop);
                }
            }
            SettingsField::Language => {
                if let Some(lang) = Language::from_code(value) {
                    self.language = lang;
                }
            }
            SettingsField::TemperatureUnit => {
                if let Some(unit) = TemperatureUnit::from_str(value) {
                    self.temperature_unit = unit;
                }
            }
            SettingsField::Notifications => {}
        }
        Ok(())
    }

    /// Toggle or cycle the focused non-text setting.
    pub fn cycle_setting(&mut self) {
        match self.settings_state.focused_field {
            SettingsField::Crops => {
                let crop = Crop::ALL[self.settings_state.crop_cursor];
                self.draft_mut().toggle_crop(crop);
            }
            SettingsField::Language => {
                self.language = self.language.next();
                tracing::debug!(language = self.language.code(), "Language changed");
            }
            SettingsField::TemperatureUnit => {
                self.temperature_unit = self.temperature_unit.toggle();
            }
            SettingsField::Notifications => {
                let kind = NotificationKind::ALL[self.settings_state.notification_cursor];
                self.notifications.toggle(kind);
                tracing::debug!(?kind, enabled = self.notifications.is_enabled(kind), "Notification toggled");
            }
            _ => {}
        }
    }

    pub fn selected_year(&self) -> &'static str {
        let years = self.history.years();
        years
            .get(self.analysis_state.year_index)
            .or_else(|| years.first())
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn seeded_app() -> App {
        let mut config = Config::default();
        config.telemetry.seed = Some(7);
        config.prediction.delay_ms = 10;
        App::new(&config)
    }

    fn fill_request(app: &mut App) {
        let req = &mut app.prediction_state.request;
        req.crop = Some(Crop::Wheat);
        req.planting_date = NaiveDate::from_ymd_opt(2025, 3, 1);
        req.field_size_acres = Some(50.0);
    }

    #[test]
    fn screen_keys() {
        assert_eq!(Screen::from_key('2'), Some(Screen::Prediction));
        assert_eq!(Screen::from_key('5'), Some(Screen::Analysis));
        assert_eq!(Screen::from_key('S'), Some(Screen::Settings));
        assert_eq!(Screen::from_key('9'), None);
    }

    #[test]
    fn starts_with_seed_recommendations() {
        let app = seeded_app();
        assert_eq!(app.recommendations.len(), 2);
        let urgent = app.urgent_recommendations();
        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].id, "irrigation");
        assert_eq!(app.weather_alert().as_deref(), Some("Rain expected: 7 mm"));
    }

    #[test]
    fn ticks_update_readings_and_rules() {
        let mut app = seeded_app();
        let before = app.telemetry.last_updated();
        app.apply_ticks(3);
        assert!(app.telemetry.last_updated() >= before);
        assert_eq!(app.telemetry.history().count(), 4);
        assert!(!app.recommendations.is_empty());
    }

    #[test]
    fn incomplete_request_reports_localized_status() {
        let mut app = seeded_app();
        app.language = Language::Spanish;
        assert!(!app.request_prediction());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Por favor complete todos los campos")
        );
    }

    #[test]
    fn incomplete_request_is_rejected() {
        let mut app = seeded_app();
        app.prediction_state.request.crop = Some(Crop::Corn);
        assert!(!app.request_prediction());
        assert!(!app.prediction_state.is_pending());
    }

    #[tokio::test]
    async fn prediction_revealed_after_delay() {
        let mut app = seeded_app();
        fill_request(&mut app);
        app.switch_screen(Screen::Prediction);
        assert!(app.request_prediction());
        assert!(app.prediction_state.is_pending());

        for _ in 0..200 {
            app.poll_prediction();
            if app.prediction_state.result.is_some() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let outcome = app.prediction_state.result.clone().unwrap();
        assert_eq!(outcome.prediction.crop, "Wheat");
        assert_eq!(outcome.field_size_acres, 50.0);
        assert_eq!(app.recent_predictions.len(), 1);
        assert!(!app.prediction_state.is_pending());
    }

    #[tokio::test]
    async fn leaving_prediction_view_cancels() {
        let mut app = seeded_app();
        fill_request(&mut app);
        app.switch_screen(Screen::Prediction);
        app.request_prediction();

        app.switch_screen(Screen::Dashboard);
        assert!(!app.prediction_state.is_pending());

        tokio::time::sleep(Duration::from_millis(30)).await;
        app.poll_prediction();
        assert!(app.prediction_state.result.is_none());
        assert!(app.recent_predictions.is_empty());
    }

    #[test]
    fn cycle_crop_wraps() {
        let mut state = PredictionState::new();
        state.cycle_crop(true);
        assert_eq!(state.request.crop, Some(Crop::Wheat));
        state.cycle_crop(false);
        assert_eq!(state.request.crop, Some(Crop::Oats));
    }

    #[test]
    fn editing_prediction_fields() {
        let mut state = PredictionState::new();
        state.focused_field = PredictionField::PlantingDate;
        state.start_editing();
        state.edit_buffer.push_str("2025-04-10");
        state.finish_editing();
        assert_eq!(
            state.request.planting_date,
            NaiveDate::from_ymd_opt(2025, 4, 10)
        );

        state.focused_field = PredictionField::FieldSize;
        state.start_editing();
        state.edit_buffer.push_str("abc");
        state.finish_editing();
        assert_eq!(state.request.field_size_acres, None);
    }

    #[test]
    fn settings_edits_are_staged_until_saved() {
        let mut app = seeded_app();
        app.switch_screen(Screen::Settings);
        app.apply_setting(SettingsField::Name, "  North Field ").unwrap();
        assert_eq!(app.settings_farm().name, "North Field");
        assert_eq!(app.farm.name, "Green Valley Farm");
        assert!(app.has_unsaved_settings());

        app.apply_setting(SettingsField::Name, "").unwrap();
        assert_eq!(app.settings_farm().name, "North Field");

        assert!(app.apply_setting(SettingsField::Size, "-5").is_err());
        assert_eq!(app.settings_farm().size_acres, 150.0);
        app.apply_setting(SettingsField::Size, "220.5").unwrap();

        app.save_settings();
        assert_eq!(app.farm.name, "North Field");
        assert_eq!(app.farm.size_acres, 220.5);
        assert!(!app.has_unsaved_settings());
        assert_eq!(app.status_message.as_deref(), Some("Settings saved successfully!"));
    }

    #[test]
    fn discarding_settings_restores_saved_profile() {
        let mut app = seeded_app();
        app.switch_screen(Screen::Settings);
        app.apply_setting(SettingsField::Location, "Punjab").unwrap();
        app.settings_state.focused_field = SettingsField::Crops;
        app.settings_state.crop_cursor = 3;
        app.cycle_setting();
        assert!(app.settings_farm().grows(Crop::Rice));

        app.discard_settings();
        assert_eq!(app.settings_farm(), &app.farm);
        assert_eq!(app.farm.location, "California, USA");
        assert!(!app.farm.grows(Crop::Rice));
    }

    #[test]
    fn leaving_settings_drops_the_draft() {
        let mut app = seeded_app();
        app.switch_screen(Screen::Settings);
        app.apply_setting(SettingsField::Name, "Scratch").unwrap();
        app.switch_screen(Screen::Dashboard);
        assert!(app.settings_state.draft.is_none());
        assert_eq!(app.farm.name, "Green Valley Farm");

        app.switch_screen(Screen::Settings);
        assert_eq!(app.settings_farm().name, "Green Valley Farm");
    }

    #[test]
    fn notification_toggles_filter_dashboard() {
        let mut app = seeded_app();
        app.switch_screen(Screen::Settings);
        app.settings_state.focused_field = SettingsField::Notifications;

        app.settings_state.notification_cursor = 0;
        app.cycle_setting();
        assert!(!app.notifications.weather_alerts);
        assert!(app.weather_alert().is_none());

        app.settings_state.move_notification_cursor(true);
        app.cycle_setting();
        assert!(!app.notifications.irrigation_reminders);
        assert!(app.urgent_recommendations().is_empty());
        assert_eq!(
            app.settings_value(SettingsField::Notifications),
            "Pest Control Alerts, Harvest Predictions"
        );
    }

    #[test]
    fn cycling_settings() {
        let mut app = seeded_app();
        app.settings_state.focused_field = SettingsField::Language;
        app.cycle_setting();
        assert_eq!(app.language, Language::Spanish);
        assert_eq!(app.text(StringId::Save), "Guardar");

        app.settings_state.focused_field = SettingsField::Crops;
        app.settings_state.crop_cursor = 0;
        app.cycle_setting();
        assert!(!app.settings_farm().grows(Crop::Wheat));
        app.cycle_setting();
        assert_eq!(app.settings_farm().crops().last(), Some(&Crop::Wheat));

        app.settings_state.focused_field = SettingsField::TemperatureUnit;
        app.cycle_setting();
        assert_eq!(app.temperature_unit, TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn analysis_year_navigation() {
        let mut app = seeded_app();
        assert_eq!(app.selected_year(), "2024");
        let count = app.history.years().len();
        for _ in 0..10 {
            app.analysis_state.older(count);
        }
        assert_eq!(app.selected_year(), "2020");
        app.analysis_state.newer();
        assert_eq!(app.selected_year(), "2021");
    }
}
