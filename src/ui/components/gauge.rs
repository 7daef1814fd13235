use crate::models::TemperatureUnit;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Boxed reading with a value line and a fill bar underneath.
pub struct GaugeWidget<'a> {
    title: &'a str,
    value: f64,
    display: Option<String>,
    unit: &'a str,
    min: f64,
    max: f64,
    thresholds: Vec<(f64, Color)>,
    precision: usize,
}

impl<'a> GaugeWidget<'a> {
    pub fn new(title: &'a str, value: f64, unit: &'a str) -> Self {
        Self {
            title,
            value,
            display: None,
            unit,
            min: 0.0,
            max: 100.0,
            thresholds: Vec::new(),
            precision: 1,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn thresholds(mut self, thresholds: Vec<(f64, Color)>) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Show this text instead of the formatted value; the bar still tracks `value`.
    pub fn display(mut self, text: String) -> Self {
        self.display = Some(text);
        self
    }

    fn get_color(&self, value: f64) -> Color {
        for (threshold, color) in self.thresholds.iter().rev() {
            if value >= *threshold {
                return *color;
            }
        }
        Theme::FG
    }

    fn fill_ratio(&self) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

impl Widget for GaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let color = self.get_color(self.value);
        let value_str = match &self.display {
            Some(text) => text.clone(),
            None => format!("{:.prec$}{}", self.value, self.unit, prec = self.precision),
        };

        let value_line = Line::from(vec![Span::styled(value_str, Style::default().fg(color))]);
        Paragraph::new(value_line).render(inner, buf);

        if inner.height >= 2 {
            let bar_area = Rect {
                x: inner.x,
                y: inner.y + 1,
                width: inner.width,
                height: 1,
            };

            let filled = (bar_area.width as f64 * self.fill_ratio()) as u16;

            for x in bar_area.x..bar_area.x + bar_area.width {
                let ch = if x < bar_area.x + filled {
                    '█'
                } else {
                    '░'
                };
                buf[(x, bar_area.y)].set_char(ch).set_fg(color);
            }
        }
    }
}

/// Temperature from a Celsius reading, shown in the chosen unit.
pub fn temperature_gauge(title: &str, celsius: f64, unit: TemperatureUnit) -> GaugeWidget<'_> {
    GaugeWidget::new(title, celsius, "")
        .display(unit.format(celsius))
        .range(-10.0, 45.0)
        .thresholds(vec![
            (f64::NEG_INFINITY, Theme::TEMP_COLD),
            (5.0, Theme::TEMP_COOL),
            (15.0, Theme::TEMP_WARM),
            (28.0, Theme::TEMP_HOT),
        ])
}

pub fn humidity_gauge(title: &str, value: f64) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "%")
        .range(0.0, 100.0)
        .precision(0)
        .thresholds(vec![
            (0.0, Theme::SUCCESS),
            (70.0, Theme::WARNING),
            (85.0, Theme::ERROR),
        ])
}

pub fn moisture_gauge(title: &str, value: f64) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "%")
        .range(0.0, 100.0)
        .precision(0)
        .thresholds(vec![
            (0.0, Theme::MOISTURE_DRY),
            (40.0, Theme::MOISTURE_OK),
            (70.0, Theme::MOISTURE_WET),
        ])
}

/// Nutrient level as percent of optimal.
pub fn nutrient_gauge(title: &str, value: f64) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "%")
        .range(0.0, 100.0)
        .precision(0)
        .thresholds(vec![
            (0.0, Theme::ERROR),
            (60.0, Theme::WARNING),
            (80.0, Theme::SUCCESS),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_highest_threshold_reached() {
        let gauge = moisture_gauge("Moisture", 42.0);
        assert_eq!(gauge.get_color(42.0), Theme::MOISTURE_OK);
        assert_eq!(gauge.get_color(10.0), Theme::MOISTURE_DRY);
        assert_eq!(gauge.get_color(90.0), Theme::MOISTURE_WET);
    }

    #[test]
    fn fill_ratio_is_clamped() {
        assert_eq!(nutrient_gauge("N", 150.0).fill_ratio(), 1.0);
        assert_eq!(nutrient_gauge("N", -5.0).fill_ratio(), 0.0);
        assert_eq!(humidity_gauge("H", 50.0).fill_ratio(), 0.5);
    }

    #[test]
    fn temperature_gauge_uses_display_unit() {
        let gauge = temperature_gauge("Temp", 24.0, TemperatureUnit::Fahrenheit);
        assert_eq!(gauge.display.as_deref(), Some("75°F"));
        assert_eq!(gauge.get_color(-20.0), Theme::TEMP_COLD);
    }

    #[test]
    fn renders_value_and_bar() {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        humidity_gauge("Humidity", 50.0).render(area, &mut buf);

        let value_row: String = (1..19).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(value_row.starts_with("50%"));
        assert_eq!(buf[(1, 2)].symbol(), "█");
        assert_eq!(buf[(18, 2)].symbol(), "░");
    }
}
