use crate::i18n::{text, Language, StringId};
use crate::models::{Priority, PriorityCounts, Recommendation, RecommendationKind};
use crate::ui::{nav_line, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct RecommendationsScreen<'a> {
    pub recommendations: &'a [Recommendation],
    pub selected_index: usize,
    pub language: Language,
}

impl<'a> RecommendationsScreen<'a> {
    pub fn new(recommendations: &'a [Recommendation]) -> Self {
        Self {
            recommendations,
            selected_index: 0,
            language: Language::default(),
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    fn t(&self, id: StringId) -> &'static str {
        text(self.language, id)
    }

    fn kind_label(&self, kind: RecommendationKind) -> &'static str {
        match kind {
            RecommendationKind::Irrigation => self.t(StringId::IrrigationAdvice),
            RecommendationKind::Fertilization => self.t(StringId::FertilizationPlan),
            RecommendationKind::PestControl => self.t(StringId::PestControlAlert),
            RecommendationKind::General => self.t(StringId::GeneralTips),
        }
    }

    fn priority_label(&self, priority: Priority) -> &'static str {
        match priority {
            Priority::High => self.t(StringId::High),
            Priority::Medium => self.t(StringId::Medium),
            Priority::Low => self.t(StringId::Low),
        }
    }
}

impl Widget for RecommendationsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let counts = PriorityCounts::tally(self.recommendations);
        let title = Line::from(vec![
            Span::styled(self.t(StringId::Recommendations), Theme::title()),
            Span::styled(format!(" ({}) ", counts.total), Theme::dim()),
            Span::styled(
                format!("{} {} ", counts.high, self.t(StringId::High)),
                Style::default().fg(Priority::High.color()),
            ),
            Span::styled(
                format!("{} {} ", counts.medium, self.t(StringId::Medium)),
                Style::default().fg(Priority::Medium.color()),
            ),
            Span::styled(
                format!("{} {}", counts.low, self.t(StringId::Low)),
                Style::default().fg(Priority::Low.color()),
            ),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        self.render_list(content[0], buf);
        self.render_details(content[1], buf);

        Paragraph::new(nav_line(self.language, &[("↑↓", "Navigate"), ("Esc", "Back")]))
            .render(chunks[2], buf);
    }
}

impl RecommendationsScreen<'_> {
    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.t(StringId::Recommendations))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.recommendations.is_empty() {
            Paragraph::new(Span::styled("No recommendations", Theme::dim())).render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, rec)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };

                let priority_style = Style::default().fg(rec.priority.color());
                let kind_style = Style::default().fg(rec.kind.color());

                let line = Line::from(vec![
                    Span::styled(format!("{} ", rec.priority.symbol()), priority_style),
                    Span::styled(self.kind_label(rec.kind), kind_style),
                ]);

                ListItem::new(line).style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Details")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(rec) = self.recommendations.get(self.selected_index) else {
            Paragraph::new(Span::styled(
                "Select a recommendation to view details",
                Theme::dim(),
            ))
            .render(inner, buf);
            return;
        };

        let mut lines = vec![
            Line::from(vec![Span::styled(rec.title.as_str(), Theme::header())]),
            Line::from(vec![]),
            Line::from(vec![
                Span::styled("Priority: ", Theme::dim()),
                Span::styled(
                    self.priority_label(rec.priority),
                    Style::default().fg(rec.priority.color()),
                ),
                Span::styled("  Type: ", Theme::dim()),
                Span::styled(
                    self.kind_label(rec.kind),
                    Style::default().fg(rec.kind.color()),
                ),
            ]),
            Line::from(vec![]),
            Line::from(vec![Span::styled(rec.description.as_str(), Theme::normal())]),
            Line::from(vec![]),
        ];

        if !rec.data_points.is_empty() {
            lines.push(Line::from(vec![Span::styled("Data Points:", Theme::dim())]));
            for dp in &rec.data_points {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}: ", dp.label), Theme::dim()),
                    Span::styled(dp.value.as_str(), Theme::highlight()),
                ]));
            }
            lines.push(Line::from(vec![]));
        }

        if !rec.action.is_empty() {
            lines.push(Line::from(vec![Span::styled("Action:", Theme::dim())]));
            lines.push(Line::from(vec![Span::styled(
                rec.action.as_str(),
                Theme::success(),
            )]));
        }
        if !rec.timing.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Timing: ", Theme::dim()),
                Span::styled(rec.timing.as_str(), Theme::warning()),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
