use crate::app::SettingsField;
use crate::i18n::{text, Language, StringId};
use crate::models::{Crop, FarmProfile, NotificationKind, NotificationPrefs, TemperatureUnit};
use crate::ui::{nav_line, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct SettingsScreen<'a> {
    pub farm: &'a FarmProfile,
    pub language: Language,
    pub unit: TemperatureUnit,
    pub focused_field: SettingsField,
    pub editing: bool,
    pub edit_buffer: &'a str,
    pub crop_cursor: usize,
    pub notifications: NotificationPrefs,
    pub notification_cursor: usize,
    pub unsaved: bool,
    pub status_message: Option<&'a str>,
}

impl<'a> SettingsScreen<'a> {
    pub fn new(farm: &'a FarmProfile, language: Language, unit: TemperatureUnit) -> Self {
        Self {
            farm,
            language,
            unit,
            focused_field: SettingsField::Name,
            editing: false,
            edit_buffer: "",
            crop_cursor: 0,
            notifications: NotificationPrefs::default(),
            notification_cursor: 0,
            unsaved: false,
            status_message: None,
        }
    }

    pub fn with_focus(mut self, field: SettingsField, crop_cursor: usize) -> Self {
        self.focused_field = field;
        self.crop_cursor = crop_cursor;
        self
    }

    pub fn with_notifications(mut self, prefs: NotificationPrefs, cursor: usize) -> Self {
        self.notifications = prefs;
        self.notification_cursor = cursor;
        self
    }

    pub fn unsaved(mut self, unsaved: bool) -> Self {
        self.unsaved = unsaved;
        self
    }

    pub fn editing(mut self, editing: bool, buffer: &'a str) -> Self {
        self.editing = editing;
        self.edit_buffer = buffer;
        self
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }

    fn get_field_value(&self, field: SettingsField) -> Line<'static> {
        match field {
            SettingsField::Name => Line::from(self.farm.name.clone()),
            SettingsField::Location => Line::from(self.farm.location.clone()),
            SettingsField::Size => Line::from(format!(
                "{} {}",
                self.farm.size_acres,
                text(self.language, StringId::Acres)
            )),
            SettingsField::Crops => {
                let focused = self.focused_field == SettingsField::Crops;
                let spans: Vec<Span> = Crop::ALL
                    .iter()
                    .enumerate()
                    .map(|(i, crop)| {
                        let mark = if self.farm.grows(*crop) { "[x]" } else { "[ ]" };
                        let style = if focused && i == self.crop_cursor {
                            Theme::selected()
                        } else if self.farm.grows(*crop) {
                            Theme::success()
                        } else {
                            Theme::dim()
                        };
                        Span::styled(format!("{} {}  ", mark, crop.as_str()), style)
                    })
                    .collect();
                Line::from(spans)
            }
            SettingsField::Language => Line::from(
                Language::ALL
                    .iter()
                    .map(|lang| {
                        let style = if *lang == self.language {
                            Theme::highlight()
                        } else {
                            Theme::dim()
                        };
                        Span::styled(format!("{}  ", lang.native_name()), style)
                    })
                    .collect::<Vec<_>>(),
            ),
            SettingsField::TemperatureUnit => Line::from(
                [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit]
                    .iter()
                    .map(|unit| {
                        let style = if *unit == self.unit {
                            Theme::highlight()
                        } else {
                            Theme::dim()
                        };
                        Span::styled(format!("{}  ", unit.symbol()), style)
                    })
                    .collect::<Vec<_>>(),
            ),
            SettingsField::Notifications => {
                let focused = self.focused_field == SettingsField::Notifications;
                let spans: Vec<Span> = NotificationKind::ALL
                    .iter()
                    .enumerate()
                    .map(|(i, kind)| {
                        let enabled = self.notifications.is_enabled(*kind);
                        let mark = if enabled { "[x]" } else { "[ ]" };
                        let style = if focused && i == self.notification_cursor {
                            Theme::selected()
                        } else if enabled {
                            Theme::success()
                        } else {
                            Theme::dim()
                        };
                        Span::styled(
                            format!("{} {}  ", mark, text(self.language, kind.label())),
                            style,
                        )
                    })
                    .collect();
                Line::from(spans)
            }
        }
    }
}

impl Widget for SettingsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(23),   // Form (7 fields * 3 lines + borders)
                Constraint::Length(3), // Help
                Constraint::Length(1), // Status
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled(text(self.language, StringId::Settings), Theme::title()),
            Span::styled(
                format!(" - {}", text(self.language, StringId::FarmOverview)),
                Theme::dim(),
            ),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        self.render_form(chunks[1], buf);
        self.render_help(chunks[2], buf);

        if let Some(msg) = self.status_message {
            Paragraph::new(Span::styled(msg, Theme::warning())).render(chunks[3], buf);
        } else if self.unsaved {
            Paragraph::new(Span::styled(
                text(self.language, StringId::UnsavedChanges),
                Theme::warning(),
            ))
            .render(chunks[3], buf);
        }

        let update = text(self.language, StringId::Update);
        let save = text(self.language, StringId::Save);
        let cancel = text(self.language, StringId::Cancel);
        let hints: Vec<(&str, &str)> = if self.editing {
            vec![("Enter", update), ("Esc", cancel)]
        } else {
            vec![
                ("↑↓", "Navigate"),
                ("Enter", "Edit/Toggle"),
                ("Ctrl+S", save),
                ("x", cancel),
                ("Esc", "Back"),
            ]
        };
        Paragraph::new(nav_line(self.language, &hints)).render(chunks[4], buf);
    }
}

impl SettingsScreen<'_> {
    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Farm Profile")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let field_height = 3;
        let constraints: Vec<Constraint> = SettingsField::all()
            .iter()
            .map(|_| Constraint::Length(field_height))
            .collect();

        let field_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (i, field) in SettingsField::all().iter().enumerate() {
            let is_focused = *field == self.focused_field;

            let value = if is_focused && self.editing {
                Line::from(Span::styled(
                    format!("{}_", self.edit_buffer),
                    Theme::highlight(),
                ))
            } else if is_focused && field.is_text() {
                self.get_field_value(*field).style(Theme::selected())
            } else {
                self.get_field_value(*field)
            };

            let border_style = if is_focused {
                Theme::border_focused()
            } else {
                Theme::border()
            };

            let field_block = Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(border_style);

            let field_inner = field_block.inner(field_areas[i]);
            field_block.render(field_areas[i], buf);

            Paragraph::new(value).render(field_inner, buf);
        }
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Field Options")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let help_text = match self.focused_field {
            SettingsField::Name => "Enter a name for the farm".to_string(),
            SettingsField::Location => "Region or address shown on the dashboard".to_string(),
            SettingsField::Size => "Farm size in acres (must be positive)".to_string(),
            SettingsField::Crops => "←→ to move, Space/Enter to toggle a crop".to_string(),
            SettingsField::Language => format!("{} (Enter to switch)", self.language.region()),
            SettingsField::TemperatureUnit => "Enter to switch between °C and °F".to_string(),
            SettingsField::Notifications => {
                "←→ to move, Space/Enter to toggle a dashboard alert".to_string()
            }
        };

        Paragraph::new(Span::styled(help_text, Theme::dim())).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(screen: SettingsScreen<'_>) -> String {
        let area = Rect::new(0, 0, 120, 29);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_notification_toggles_and_unsaved_marker() {
        let farm = FarmProfile::default();
        let prefs = NotificationPrefs {
            pest_control_alerts: false,
            ..NotificationPrefs::default()
        };
        let out = rendered(
            SettingsScreen::new(&farm, Language::English, TemperatureUnit::Celsius)
                .with_focus(SettingsField::Language, 0)
                .with_notifications(prefs, 2)
                .unsaved(true),
        );
        assert!(out.contains("[x] Weather Alerts"));
        assert!(out.contains("[ ] Pest Control Alerts"));
        assert!(out.contains("Unsaved changes"));
        assert!(out.contains("English - United States"));
    }

    #[test]
    fn status_message_replaces_unsaved_marker() {
        let farm = FarmProfile::default();
        let out = rendered(
            SettingsScreen::new(&farm, Language::English, TemperatureUnit::Celsius)
                .unsaved(true)
                .with_status(Some("Settings saved successfully!")),
        );
        assert!(out.contains("Settings saved successfully!"));
        assert!(!out.contains("Unsaved changes"));
    }
}
