use crate::app::PredictionOutcome;
use crate::i18n::{text, Language, StringId};
use crate::logic::TelemetryStore;
use crate::models::{
    FarmProfile, NotificationPrefs, Priority, Recommendation, TemperatureUnit, YieldTrend,
};
use crate::ui::components::{humidity_gauge, moisture_gauge, temperature_gauge, GaugeWidget};
use crate::ui::{nav_line, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

pub struct DashboardScreen<'a> {
    pub farm: &'a FarmProfile,
    pub telemetry: &'a TelemetryStore,
    pub urgent: &'a [&'a Recommendation],
    pub recent_predictions: &'a [PredictionOutcome],
    pub yield_trend: YieldTrend,
    pub language: Language,
    pub unit: TemperatureUnit,
    pub notifications: NotificationPrefs,
    pub weather_alert: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

impl<'a> DashboardScreen<'a> {
    pub fn new(
        farm: &'a FarmProfile,
        telemetry: &'a TelemetryStore,
        urgent: &'a [&'a Recommendation],
        recent_predictions: &'a [PredictionOutcome],
    ) -> Self {
        Self {
            farm,
            telemetry,
            urgent,
            recent_predictions,
            yield_trend: YieldTrend::flat(),
            language: Language::default(),
            unit: TemperatureUnit::default(),
            notifications: NotificationPrefs::default(),
            weather_alert: None,
            status_message: None,
        }
    }

    pub fn with_trend(mut self, trend: YieldTrend) -> Self {
        self.yield_trend = trend;
        self
    }

    pub fn with_display(mut self, language: Language, unit: TemperatureUnit) -> Self {
        self.language = language;
        self.unit = unit;
        self
    }

    pub fn with_notifications(mut self, prefs: NotificationPrefs, alert: Option<&'a str>) -> Self {
        self.notifications = prefs;
        self.weather_alert = alert;
        self
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }

    fn t(&self, id: StringId) -> &'static str {
        text(self.language, id)
    }
}

impl Widget for DashboardScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(5), // Gauges row
                Constraint::Min(8),    // Recommendations and predictions
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_gauges(chunks[1], buf);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        self.render_urgent(middle[0], buf);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(3)])
            .split(middle[1]);

        self.render_quick_stats(right[0], buf);
        self.render_recent_predictions(right[1], buf);

        self.render_status_message(chunks[3], buf);

        Paragraph::new(nav_line(self.language, &[])).render(chunks[4], buf);
    }
}

impl DashboardScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            "FieldOps - {} {} ({})",
            self.t(StringId::WelcomeBack),
            self.farm.name,
            self.farm.location
        );

        let block = Block::default()
            .title(Span::styled(title, Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());

        let info = format!(
            "{}: {} | Last updated: {}",
            self.t(StringId::FarmOverview),
            self.farm.crop_list(),
            self.telemetry
                .last_updated()
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
        );
        Paragraph::new(Span::styled(info, Theme::dim()))
            .block(block)
            .render(area, buf);
    }

    fn render_gauges(&self, area: Rect, buf: &mut Buffer) {
        let gauge_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 5); 5])
            .split(area);

        let weather = self.telemetry.weather();
        let soil = self.telemetry.soil();

        temperature_gauge(self.t(StringId::Temperature), weather.temperature_c, self.unit)
            .render(gauge_chunks[0], buf);
        humidity_gauge(self.t(StringId::Humidity), weather.humidity_percent)
            .render(gauge_chunks[1], buf);
        moisture_gauge(self.t(StringId::SoilMoisture), soil.moisture_percent)
            .render(gauge_chunks[2], buf);
        GaugeWidget::new(self.t(StringId::Rainfall), weather.rainfall_mm, "mm")
            .range(0.0, 50.0)
            .precision(0)
            .thresholds(vec![(0.0, Theme::RAIN)])
            .render(gauge_chunks[3], buf);
        GaugeWidget::new(self.t(StringId::WindSpeed), weather.wind_speed_kmh, " km/h")
            .range(0.0, 60.0)
            .precision(0)
            .thresholds(vec![(0.0, Theme::SUCCESS), (30.0, Theme::WARNING)])
            .render(gauge_chunks[4], buf);
    }

    fn render_quick_stats(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(self.t(StringId::QuickStats), Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let trend_style = Style::default().fg(Theme::trend_color(self.yield_trend.is_positive));
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{:.0} ", self.farm.size_acres), Theme::highlight()),
                Span::styled(self.t(StringId::Acres), Theme::dim()),
                Span::styled(
                    format!("   {} ", self.farm.crops().len()),
                    Theme::highlight(),
                ),
                Span::styled("Active Crops", Theme::dim()),
            ]),
            Line::from(vec![
                Span::styled(self.yield_trend.label(), trend_style),
                Span::styled(" yield vs last season", Theme::dim()),
            ]),
            Line::from(vec![
                Span::styled(format!("{}: ", self.t(StringId::PhLevel)), Theme::dim()),
                Span::styled(
                    format!("{:.1}", self.telemetry.soil().ph),
                    Theme::normal(),
                ),
                Span::styled(format!("  {}: ", self.t(StringId::Nitrogen)), Theme::dim()),
                Span::styled(
                    format!("{:.0}%", self.telemetry.soil().nitrogen),
                    Style::default().fg(Theme::nutrient_color(self.telemetry.soil().nitrogen)),
                ),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_urgent(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                self.t(StringId::UrgentRecommendations),
                Theme::header(),
            ))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.urgent.is_empty() {
            Paragraph::new(Span::styled("No urgent recommendations", Theme::dim()))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .urgent
            .iter()
            .take(4)
            .map(|r| {
                let priority_style = Style::default().fg(r.priority.color());
                let priority_label = match r.priority {
                    Priority::High => self.t(StringId::High),
                    Priority::Medium => self.t(StringId::Medium),
                    Priority::Low => self.t(StringId::Low),
                };
                let title_line = Line::from(vec![
                    Span::styled(format!("{} ", r.priority.symbol()), priority_style),
                    Span::styled(r.title.as_str(), priority_style),
                    Span::styled(format!(" ({})", priority_label), Theme::dim()),
                ]);
                let action_line = Line::from(vec![
                    Span::styled("  ", Theme::dim()),
                    Span::styled(r.action.as_str(), Theme::dim()),
                ]);
                ListItem::new(vec![title_line, action_line])
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_recent_predictions(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                self.t(StringId::RecentPredictions),
                Theme::header(),
            ))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if !self.notifications.harvest_predictions {
            Paragraph::new(Span::styled(
                format!("{} off", text(self.language, StringId::HarvestPredictions)),
                Theme::dim(),
            ))
            .render(inner, buf);
            return;
        }

        if self.recent_predictions.is_empty() {
            Paragraph::new(Span::styled("No predictions yet - press [2]", Theme::dim()))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .recent_predictions
            .iter()
            .map(|outcome| {
                let p = &outcome.prediction;
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<10}", p.crop), Theme::normal()),
                    Span::styled(
                        format!("{:.1} {}/acre ", p.expected_yield, self.t(StringId::Tons)),
                        Theme::highlight(),
                    ),
                    Span::styled(
                        format!("{} {}%", self.t(StringId::Confidence), p.confidence),
                        Theme::dim(),
                    ),
                ]))
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_status_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.status_message {
            Paragraph::new(Span::styled(msg, Theme::success())).render(area, buf);
        } else if let Some(alert) = self.weather_alert {
            Paragraph::new(Span::styled(alert, Style::default().fg(Theme::RAIN)))
                .render(area, buf);
        }
    }
}
