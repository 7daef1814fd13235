use crate::i18n::{text, Language, StringId};
use crate::logic::history::{ANNUAL_RAINFALL_MM, SEASON_TEMPERATURE_C};
use crate::logic::HistoricalAggregator;
use crate::models::{CropFilter, TemperatureUnit};
use crate::ui::{nav_line, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph, Widget},
};

pub struct AnalysisScreen<'a> {
    pub history: &'a HistoricalAggregator,
    pub selected_year: &'a str,
    pub crop_filter: CropFilter,
    pub language: Language,
    pub unit: TemperatureUnit,
}

impl<'a> AnalysisScreen<'a> {
    pub fn new(history: &'a HistoricalAggregator, selected_year: &'a str) -> Self {
        Self {
            history,
            selected_year,
            crop_filter: CropFilter::All,
            language: Language::default(),
            unit: TemperatureUnit::default(),
        }
    }

    pub fn with_filter(mut self, filter: CropFilter) -> Self {
        self.crop_filter = filter;
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
}

impl Widget for AnalysisScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(12),   // Chart and year detail
                Constraint::Length(7), // Improvements and climate
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled(self.t(StringId::Analysis), Theme::title()),
            Span::styled(
                format!(" - {} | {}", self.selected_year, self.crop_filter.label()),
                Theme::dim(),
            ),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        self.render_chart(top[0], buf);
        self.render_year(top[1], buf);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        self.render_improvements(bottom[0], buf);
        self.render_climate(bottom[1], buf);

        Paragraph::new(nav_line(
            self.language,
            &[("←→", "Year"), ("c", "Crop"), ("Esc", "Back")],
        ))
        .render(chunks[3], buf);
    }
}

impl AnalysisScreen<'_> {
    fn render_chart(&self, area: Rect, buf: &mut Buffer) {
        let bars: Vec<Bar> = self
            .history
            .records()
            .iter()
            .map(|r| {
                let value = r.yield_for(self.crop_filter);
                let style = if r.year == self.selected_year {
                    Style::default()
                        .fg(Theme::HIGHLIGHT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Theme::ACCENT)
                };
                Bar::default()
                    .value((value * 10.0).round() as u64)
                    .text_value(format!("{:.1}", value))
                    .label(Line::from(r.year))
                    .style(style)
            })
            .collect();

        let max = match self.crop_filter {
            CropFilter::All => (self.history.max_total() * 10.0).round() as u64,
            filter => self
                .history
                .records()
                .iter()
                .map(|r| (r.yield_for(filter) * 10.0).round() as u64)
                .max()
                .unwrap_or(0),
        };

        BarChart::default()
            .block(
                Block::default()
                    .title(format!(
                        "{} ({}/acre)",
                        self.crop_filter.label(),
                        self.t(StringId::Tons)
                    ))
                    .borders(Borders::ALL)
                    .border_style(Theme::border()),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(6)
            .bar_gap(2)
            .max(max + max / 10)
            .render(area, buf);
    }

    fn render_year(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.selected_year.to_string())
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let record = self.history.year_record(self.selected_year);
        let trend = self.history.yoy_change(self.selected_year);
        let trend_style = Style::default().fg(Theme::trend_color(trend.is_positive));

        let crop_line = |label: &'static str, value: f64| {
            Line::from(vec![
                Span::styled(format!("{:<10}", label), Theme::dim()),
                Span::styled(format!("{:.1}", value), Theme::normal()),
            ])
        };

        let lines = vec![
            crop_line("Wheat", record.wheat),
            crop_line("Corn", record.corn),
            crop_line("Soybeans", record.soybeans),
            Line::from(vec![
                Span::styled(format!("{:<10}", "Total"), Theme::dim()),
                Span::styled(format!("{:.1}", record.total), Theme::header()),
            ]),
            Line::from(vec![]),
            Line::from(vec![
                Span::styled("YoY ", Theme::dim()),
                Span::styled(trend.label(), trend_style),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_improvements(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Improvements")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let items: Vec<ListItem> = self
            .history
            .improvements()
            .iter()
            .map(|imp| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<24}", imp.category), Theme::normal()),
                    Span::styled(format!("+{}%", imp.improvement_percent), Theme::success()),
                    Span::styled(format!(" over {} years", imp.period_years), Theme::dim()),
                ]))
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }

    fn render_climate(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Climate Trends")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let items: Vec<ListItem> = self
            .history
            .records()
            .iter()
            .zip(SEASON_TEMPERATURE_C.iter().zip(ANNUAL_RAINFALL_MM.iter()))
            .map(|(r, (temp, rain))| {
                let style = if r.year == self.selected_year {
                    Theme::highlight()
                } else {
                    Theme::normal()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}  ", r.year), style),
                    Span::styled(
                        format!("{:>6}", self.unit.format(*temp)),
                        Style::default().fg(Theme::temp_color(*temp)),
                    ),
                    Span::styled(
                        format!("  {:>4.0} mm", rain),
                        Style::default().fg(Theme::RAIN),
                    ),
                ]))
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}
