use crate::app::{PredictionField, PredictionOutcome, PredictionState};
use crate::i18n::{text, Language, StringId};
use crate::models::{Crop, FarmProfile};
use crate::ui::components::{GaugeWidget, InputWidget, SelectWidget};
use crate::ui::{nav_line, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct PredictionScreen<'a> {
    pub state: &'a PredictionState,
    pub farm: &'a FarmProfile,
    pub language: Language,
    pub spinner_frame: usize,
}

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

impl<'a> PredictionScreen<'a> {
    pub fn new(state: &'a PredictionState, farm: &'a FarmProfile) -> Self {
        Self {
            state,
            farm,
            language: Language::default(),
            spinner_frame: 0,
        }
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn spinner(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    fn t(&self, id: StringId) -> &'static str {
        text(self.language, id)
    }
}

impl Widget for PredictionScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(12),   // Form and results
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled(self.t(StringId::PredictYield), Theme::title()),
            Span::styled(format!(" - {}", self.farm.name), Theme::dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        self.render_form(content[0], buf);
        self.render_results(content[1], buf);

        let hints: &[(&str, &str)] = if self.state.editing {
            &[("Enter", "Apply"), ("Esc", "Cancel")]
        } else {
            &[
                ("↑↓", "Field"),
                ("←→", "Crop"),
                ("Enter", "Edit"),
                ("p", "Predict"),
                ("Esc", "Cancel/Back"),
            ]
        };
        Paragraph::new(nav_line(self.language, hints)).render(chunks[2], buf);
    }
}

impl PredictionScreen<'_> {
    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.t(StringId::PredictYield))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        let crop_names: Vec<&str> = Crop::ALL.iter().map(|c| c.as_str()).collect();
        let crop_index = self
            .state
            .request
            .crop
            .and_then(|crop| Crop::ALL.iter().position(|c| *c == crop));

        for (i, field) in PredictionField::all().iter().enumerate() {
            let focused = *field == self.state.focused_field;
            let label = self.t(field.label());
            match field {
                PredictionField::Crop => {
                    SelectWidget::new(label, &crop_names, crop_index)
                        .focused(focused)
                        .placeholder("--")
                        .render(rows[i], buf);
                }
                _ => {
                    let editing = focused && self.state.editing;
                    let value = if editing {
                        self.state.edit_buffer.clone()
                    } else {
                        self.state.field_value(*field)
                    };
                    let placeholder = match field {
                        PredictionField::PlantingDate => "YYYY-MM-DD",
                        _ => self.t(StringId::Acres),
                    };
                    InputWidget::new(label, &value)
                        .focused(focused)
                        .editing(editing)
                        .placeholder(placeholder)
                        .render(rows[i], buf);
                }
            }
        }

        let (button_text, button_style) = if self.state.is_pending() {
            (
                format!(
                    "{} {}",
                    SPINNER[self.spinner_frame % SPINNER.len()],
                    self.t(StringId::Loading)
                ),
                Theme::warning(),
            )
        } else if self.state.request.is_complete() {
            (
                format!("[p] {}", self.t(StringId::PredictButton)),
                Theme::highlight(),
            )
        } else {
            (
                format!("[p] {}", self.t(StringId::PredictButton)),
                Theme::dim(),
            )
        };

        let button = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border());
        Paragraph::new(Span::styled(button_text, button_style))
            .block(button)
            .render(rows[3], buf);
    }

    fn render_results(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.t(StringId::PredictionResults))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        match &self.state.result {
            Some(outcome) if !self.state.is_pending() => self.render_outcome(outcome, inner, buf),
            _ => {
                let message = if self.state.is_pending() {
                    format!(
                        "{} {}",
                        SPINNER[self.spinner_frame % SPINNER.len()],
                        self.t(StringId::Loading)
                    )
                } else {
                    format!("{} [p]", self.t(StringId::PredictButton))
                };
                Paragraph::new(Span::styled(message, Theme::dim()))
                    .wrap(Wrap { trim: true })
                    .render(inner, buf);
            }
        }
    }

    fn render_outcome(&self, outcome: &PredictionOutcome, area: Rect, buf: &mut Buffer) {
        let p = &outcome.prediction;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Headline numbers
                Constraint::Length(3), // Confidence
                Constraint::Length(3), // Factors
                Constraint::Min(0),
            ])
            .split(area);

        let headline = vec![
            Line::from(vec![Span::styled(p.crop.as_str(), Theme::header())]),
            Line::from(vec![
                Span::styled(format!("{}: ", self.t(StringId::ExpectedYield)), Theme::dim()),
                Span::styled(
                    format!("{:.1} {}/acre", p.expected_yield, self.t(StringId::Tons)),
                    Theme::highlight(),
                ),
            ]),
            Line::from(vec![
                Span::styled(format!("{}: ", self.t(StringId::TotalYield)), Theme::dim()),
                Span::styled(
                    format!(
                        "{:.0} {} ({} {})",
                        outcome.total_yield(),
                        self.t(StringId::Tons),
                        outcome.field_size_acres,
                        self.t(StringId::Acres)
                    ),
                    Theme::success(),
                ),
            ]),
        ];
        Paragraph::new(headline).render(rows[0], buf);

        GaugeWidget::new(self.t(StringId::Confidence), p.confidence as f64, "%")
            .range(0.0, 100.0)
            .precision(0)
            .thresholds(vec![
                (0.0, Theme::ERROR),
                (75.0, Theme::WARNING),
                (85.0, Theme::SUCCESS),
            ])
            .render(rows[1], buf);

        let factor_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(rows[2]);

        let factors = [
            (self.t(StringId::Weather), p.factors.weather),
            (self.t(StringId::Soil), p.factors.soil),
            (self.t(StringId::Practices), p.factors.practices),
        ];
        for (i, (label, value)) in factors.iter().enumerate() {
            GaugeWidget::new(label, *value as f64, "%")
                .range(70.0, 110.0)
                .precision(0)
                .thresholds(vec![(0.0, Theme::WARNING), (90.0, Theme::SUCCESS)])
                .render(factor_cols[i], buf);
        }
    }
}
