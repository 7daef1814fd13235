pub mod components;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use crate::i18n::{text, Language, StringId};
use ratatui::text::{Line, Span};

/// Screen switcher line followed by screen-specific key hints.
pub fn nav_line(language: Language, hints: &[(&str, &str)]) -> Line<'static> {
    let screens = [
        ("[1]", StringId::Dashboard),
        ("[2]", StringId::Prediction),
        ("[3]", StringId::Recommendations),
        ("[4]", StringId::Monitoring),
        ("[5]", StringId::Analysis),
        ("[s]", StringId::Settings),
    ];

    let mut spans = Vec::new();
    for (key, id) in screens {
        spans.push(Span::styled(key, Theme::nav_key()));
        spans.push(Span::styled(
            format!("{} ", text(language, id)),
            Theme::nav_label(),
        ));
    }
    for (key, label) in hints {
        spans.push(Span::styled(format!("[{}]", key), Theme::nav_key()));
        spans.push(Span::styled(format!("{} ", label), Theme::nav_label()));
    }
    spans.push(Span::styled("[q]", Theme::nav_key()));
    spans.push(Span::styled("Quit", Theme::nav_label()));

    Line::from(spans)
}
