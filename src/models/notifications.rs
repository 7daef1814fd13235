use crate::i18n::StringId;
use crate::models::RecommendationKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    WeatherAlerts,
    IrrigationReminders,
    PestControlAlerts,
    HarvestPredictions,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::WeatherAlerts,
        NotificationKind::IrrigationReminders,
        NotificationKind::PestControlAlerts,
        NotificationKind::HarvestPredictions,
    ];

    pub fn label(&self) -> StringId {
        match self {
            NotificationKind::WeatherAlerts => StringId::WeatherAlerts,
            NotificationKind::IrrigationReminders => StringId::IrrigationReminders,
            NotificationKind::PestControlAlerts => StringId::PestControlAlerts,
            NotificationKind::HarvestPredictions => StringId::HarvestPredictions,
        }
    }
}

/// Which dashboard alerts the farmer wants to see. All on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPrefs {
    pub weather_alerts: bool,
    pub irrigation_reminders: bool,
    pub pest_control_alerts: bool,
    pub harvest_predictions: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            weather_alerts: true,
            irrigation_reminders: true,
            pest_control_alerts: true,
            harvest_predictions: true,
        }
    }
}

impl NotificationPrefs {
    pub fn is_enabled(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::WeatherAlerts => self.weather_alerts,
            NotificationKind::IrrigationReminders => self.irrigation_reminders,
            NotificationKind::PestControlAlerts => self.pest_control_alerts,
            NotificationKind::HarvestPredictions => self.harvest_predictions,
        }
    }

    pub fn toggle(&mut self, kind: NotificationKind) {
        let flag = match kind {
            NotificationKind::WeatherAlerts => &mut self.weather_alerts,
            NotificationKind::IrrigationReminders => &mut self.irrigation_reminders,
            NotificationKind::PestControlAlerts => &mut self.pest_control_alerts,
            NotificationKind::HarvestPredictions => &mut self.harvest_predictions,
        };
        *flag = !*flag;
    }

    /// Whether a recommendation of this kind belongs on the dashboard.
    /// Kinds without a matching preference are always shown.
    pub fn allows(&self, kind: RecommendationKind) -> bool {
        match kind {
            RecommendationKind::Irrigation => self.irrigation_reminders,
            RecommendationKind::PestControl => self.pest_control_alerts,
            RecommendationKind::Fertilization | RecommendationKind::General => true,
        }
    }
}
