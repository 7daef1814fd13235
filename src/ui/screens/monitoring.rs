use crate::i18n::{text, Language, StringId};
use crate::logic::calculations::{series_stats, sparkline_points, Metric};
use crate::logic::TelemetryStore;
use crate::models::TemperatureUnit;
use crate::ui::components::{humidity_gauge, moisture_gauge, nutrient_gauge, temperature_gauge};
use crate::ui::{nav_line, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Sparkline, Table, Widget},
};

pub struct MonitoringScreen<'a> {
    pub telemetry: &'a TelemetryStore,
    pub metric: Metric,
    pub language: Language,
    pub unit: TemperatureUnit,
}

impl<'a> MonitoringScreen<'a> {
    pub fn new(telemetry: &'a TelemetryStore) -> Self {
        Self {
            telemetry,
            metric: Metric::Temperature,
            language: Language::default(),
            unit: TemperatureUnit::default(),
        }
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_display(mut self, language: Language, unit: TemperatureUnit) -> Self {
        self.language = language;
        self.unit = unit;
        self
    }

    fn t(&self, id: StringId) -> &'static str {
        text(self.language, id)
    }

    fn metric_label(&self, metric: Metric) -> &'static str {
        match metric {
            Metric::Temperature => self.t(StringId::Temperature),
            Metric::Humidity => self.t(StringId::Humidity),
            Metric::SoilMoisture => self.t(StringId::SoilMoisture),
        }
    }

    fn format_metric(&self, value: f64) -> String {
        match self.metric {
            Metric::Temperature => self.unit.format(value),
            Metric::Humidity | Metric::SoilMoisture => format!("{:.0}%", value),
        }
    }
}

impl Widget for MonitoringScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(5), // Weather gauges
                Constraint::Length(5), // Soil gauges
                Constraint::Min(6),    // Trend and forecast
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled(self.t(StringId::Monitoring), Theme::title()),
            Span::styled(
                format!(
                    " - {} {}",
                    self.t(StringId::CurrentConditions),
                    self.telemetry
                        .last_updated()
                        .with_timezone(&chrono::Local)
                        .format("%H:%M:%S")
                ),
                Theme::dim(),
            ),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        self.render_weather(chunks[1], buf);
        self.render_soil(chunks[2], buf);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[3]);

        self.render_trend(bottom[0], buf);
        self.render_forecast(bottom[1], buf);

        Paragraph::new(nav_line(self.language, &[("m", "Metric"), ("Esc", "Back")]))
            .render(chunks[4], buf);
    }
}

impl MonitoringScreen<'_> {
    fn render_weather(&self, area: Rect, buf: &mut Buffer) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        let weather = self.telemetry.weather();
        temperature_gauge(self.t(StringId::Temperature), weather.temperature_c, self.unit)
            .render(cols[0], buf);
        humidity_gauge(self.t(StringId::Humidity), weather.humidity_percent).render(cols[1], buf);

        let rain = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{:.0} mm", weather.rainfall_mm),
                Style::default().fg(Theme::RAIN),
            )),
            Line::from(Span::styled(
                format!("+{:.0} mm next 5 days", weather.forecast_rain_total_mm()),
                Theme::dim(),
            )),
        ])
        .block(
            Block::default()
                .title(self.t(StringId::Rainfall))
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );
        rain.render(cols[2], buf);

        Paragraph::new(Span::styled(
            format!("{:.0} km/h", weather.wind_speed_kmh),
            Theme::normal(),
        ))
        .block(
            Block::default()
                .title(self.t(StringId::WindSpeed))
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .render(cols[3], buf);
    }

    fn render_soil(&self, area: Rect, buf: &mut Buffer) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 6); 6])
            .split(area);

        let soil = self.telemetry.soil();
        moisture_gauge(self.t(StringId::SoilMoisture), soil.moisture_percent).render(cols[0], buf);

        let ph_style = if soil.ph_in_preferred_range() {
            Theme::success()
        } else {
            Theme::warning()
        };
        Paragraph::new(Span::styled(format!("{:.1}", soil.ph), ph_style))
            .block(
                Block::default()
                    .title(self.t(StringId::PhLevel))
                    .borders(Borders::ALL)
                    .border_style(Theme::border()),
            )
            .render(cols[1], buf);

        nutrient_gauge(self.t(StringId::Nitrogen), soil.nitrogen).render(cols[2], buf);
        nutrient_gauge(self.t(StringId::Phosphorus), soil.phosphorus).render(cols[3], buf);
        nutrient_gauge(self.t(StringId::Potassium), soil.potassium).render(cols[4], buf);

        Paragraph::new(Span::styled(
            format!("{:.1}%", soil.organic_matter),
            Theme::normal(),
        ))
        .block(
            Block::default()
                .title(self.t(StringId::OrganicMatter))
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .render(cols[5], buf);
    }

    fn render_trend(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(
                "{} ({} samples)",
                self.metric_label(self.metric),
                self.telemetry.history().count()
            ))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(2), Constraint::Length(1)])
            .split(inner);

        let points = sparkline_points(self.telemetry.history(), self.metric);
        let color = match self.metric {
            Metric::Temperature => Theme::TEMP_WARM,
            Metric::Humidity => Theme::HIGHLIGHT,
            Metric::SoilMoisture => Theme::moisture_color(self.telemetry.soil().moisture_percent),
        };
        Sparkline::default()
            .data(points)
            .max(100)
            .style(Style::default().fg(color))
            .render(rows[0], buf);

        if let Some(stats) = series_stats(self.telemetry.history(), self.metric) {
            let line = Line::from(vec![
                Span::styled("min ", Theme::dim()),
                Span::styled(self.format_metric(stats.min), Theme::normal()),
                Span::styled("  max ", Theme::dim()),
                Span::styled(self.format_metric(stats.max), Theme::normal()),
                Span::styled("  avg ", Theme::dim()),
                Span::styled(self.format_metric(stats.average), Theme::normal()),
                Span::styled("  now ", Theme::dim()),
                Span::styled(self.format_metric(stats.latest), Theme::highlight()),
            ]);
            Paragraph::new(line).render(rows[1], buf);
        }
    }

    fn render_forecast(&self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = self
            .telemetry
            .weather()
            .forecast
            .iter()
            .map(|day| {
                Row::new(vec![
                    day.day.clone(),
                    self.unit.format(day.temp_c),
                    day.condition.clone(),
                    format!("{:.0}mm", day.rain_mm),
                ])
                .style(Style::default().fg(Theme::temp_color(day.temp_c)))
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(9),
                Constraint::Length(6),
                Constraint::Min(10),
                Constraint::Length(5),
            ],
        )
        .block(
            Block::default()
                .title(self.t(StringId::WeatherForecast))
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );

        Widget::render(table, area, buf);
    }
}
