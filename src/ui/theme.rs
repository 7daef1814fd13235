use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // Base colors
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Green;
    pub const HIGHLIGHT: Color = Color::Cyan;

    // Status colors
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;

    // Field colors
    pub const TEMP_COLD: Color = Color::LightBlue;
    pub const TEMP_COOL: Color = Color::Cyan;
    pub const TEMP_WARM: Color = Color::Yellow;
    pub const TEMP_HOT: Color = Color::Red;
    pub const MOISTURE_DRY: Color = Color::Yellow;
    pub const MOISTURE_OK: Color = Color::Green;
    pub const MOISTURE_WET: Color = Color::LightBlue;
    pub const RAIN: Color = Color::Blue;

    // Styles
    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Self::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .fg(Self::FG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }


    pub fn temp_color(temp_c: f64) -> Color {
        if temp_c < 5.0 {
            Self::TEMP_COLD
        } else if temp_c < 15.0 {
            Self::TEMP_COOL
        } else if temp_c < 28.0 {
            Self::TEMP_WARM
        } else {
            Self::TEMP_HOT
        }
    }

    /// Soil moisture in percent
    pub fn moisture_color(moisture: f64) -> Color {
        if moisture < 40.0 {
            Self::MOISTURE_DRY
        } else if moisture < 70.0 {
            Self::MOISTURE_OK
        } else {
            Self::MOISTURE_WET
        }
    }

    /// Percent of optimal: under 60 is poor, under 80 fair.
    pub fn nutrient_color(level: f64) -> Color {
        if level < 60.0 {
            Self::ERROR
        } else if level < 80.0 {
            Self::WARNING
        } else {
            Self::SUCCESS
        }
    }

    pub fn trend_color(is_positive: bool) -> Color {
        if is_positive {
            Self::SUCCESS
        } else {
            Self::ERROR
        }
    }

    pub fn nav_key() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_label() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moisture_bands() {
        assert_eq!(Theme::moisture_color(25.0), Theme::MOISTURE_DRY);
        assert_eq!(Theme::moisture_color(42.0), Theme::MOISTURE_OK);
        assert_eq!(Theme::moisture_color(75.0), Theme::MOISTURE_WET);
    }

    #[test]
    fn temperature_bands() {
        assert_eq!(Theme::temp_color(-2.0), Theme::TEMP_COLD);
        assert_eq!(Theme::temp_color(24.0), Theme::TEMP_WARM);
        assert_eq!(Theme::temp_color(33.0), Theme::TEMP_HOT);
    }

    #[test]
    fn nutrient_bands() {
        assert_eq!(Theme::nutrient_color(50.0), Theme::ERROR);
        assert_eq!(Theme::nutrient_color(72.0), Theme::WARNING);
        assert_eq!(Theme::nutrient_color(90.0), Theme::SUCCESS);
    }
}
