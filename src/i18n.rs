use serde::{Deserialize, Serialize};

/// UI languages the dashboard ships with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "hi")]
    Hindi,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Spanish, Language::Hindi];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::Hindi => "hi",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::Hindi => "हिन्दी",
        }
    }

    pub fn region(&self) -> &'static str {
        match self {
            Language::English => "English - United States",
            Language::Spanish => "Spanish - España",
            Language::Hindi => "Hindi - भारत",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "es" | "spanish" | "español" => Some(Language::Spanish),
            "hi" | "hindi" => Some(Language::Hindi),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Language::English => Language::Spanish,
            Language::Spanish => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.native_name())
    }
}

/// Declares `StringId` together with `StringId::ALL`, so the list used by
/// `missing_translations` always covers every variant.
macro_rules! string_ids {
    ($($id:ident,)+) => {
        /// Every translatable UI string.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StringId {
            $($id,)+
        }

        impl StringId {
            pub const ALL: &'static [StringId] = &[$(StringId::$id,)+];
        }
    };
}

string_ids! {
    // Navigation
    Dashboard,
    Prediction,
    Recommendations,
    Monitoring,
    Analysis,
    Settings,

    // Dashboard
    WelcomeBack,
    FarmOverview,
    CurrentConditions,
    QuickStats,
    RecentPredictions,
    UrgentRecommendations,
    RainExpected,

    // Weather
    Temperature,
    Humidity,
    Rainfall,
    WindSpeed,
    WeatherForecast,

    // Soil
    SoilMoisture,
    PhLevel,
    Nitrogen,
    Phosphorus,
    Potassium,
    OrganicMatter,

    // Prediction
    PredictYield,
    SelectCrop,
    PlantingDate,
    FieldSize,
    PredictButton,
    PredictionResults,
    ExpectedYield,
    TotalYield,
    Confidence,
    Factors,
    Weather,
    Soil,
    Practices,
    FillAllFields,

    // Recommendations
    IrrigationAdvice,
    FertilizationPlan,
    PestControlAlert,
    GeneralTips,

    // Settings
    Notifications,
    WeatherAlerts,
    IrrigationReminders,
    PestControlAlerts,
    HarvestPredictions,
    SettingsSaved,
    UnsavedChanges,
    ChangesDiscarded,

    // Common
    Acres,
    Tons,
    High,
    Medium,
    Low,
    Save,
    Cancel,
    Update,
    Loading,
}

/// Look up a UI string. Each locale table matches exhaustively on `StringId`,
/// so a missing translation fails to compile.
pub fn text(language: Language, id: StringId) -> &'static str {
    match language {
        Language::English => english(id),
        Language::Spanish => spanish(id),
        Language::Hindi => hindi(id),
    }
}

fn english(id: StringId) -> &'static str {
    match id {
        StringId::Dashboard => "Dashboard",
        StringId::Prediction => "Crop Prediction",
        StringId::Recommendations => "Recommendations",
        StringId::Monitoring => "Data Monitoring",
        StringId::Analysis => "Historical Analysis",
        StringId::Settings => "Settings",
        StringId::WelcomeBack => "Welcome back",
        StringId::FarmOverview => "Farm Overview",
        StringId::CurrentConditions => "Current Conditions",
        StringId::QuickStats => "Quick Stats",
        StringId::RecentPredictions => "Recent Predictions",
        StringId::UrgentRecommendations => "Urgent Recommendations",
        StringId::Temperature => "Temperature",
        StringId::Humidity => "Humidity",
        StringId::Rainfall => "Rainfall",
        StringId::WindSpeed => "Wind Speed",
        StringId::WeatherForecast => "Weather Forecast",
        StringId::SoilMoisture => "Soil Moisture",
        StringId::PhLevel => "pH Level",
        StringId::Nitrogen => "Nitrogen",
        StringId::Phosphorus => "Phosphorus",
        StringId::Potassium => "Potassium",
        StringId::OrganicMatter => "Organic Matter",
        StringId::PredictYield => "Predict Crop Yield",
        StringId::SelectCrop => "Select Crop",
        StringId::PlantingDate => "Planting Date",
        StringId::FieldSize => "Field Size (acres)",
        StringId::PredictButton => "Generate Prediction",
        StringId::PredictionResults => "Prediction Results",
        StringId::ExpectedYield => "Expected Yield",
        StringId::Confidence => "Confidence",
        StringId::IrrigationAdvice => "Irrigation Advice",
        StringId::FertilizationPlan => "Fertilization Plan",
        StringId::PestControlAlert => "Pest Control Alert",
        StringId::GeneralTips => "General Tips",
        StringId::Acres => "acres",
        StringId::Tons => "tons",
        StringId::High => "High",
        StringId::Medium => "Medium",
        StringId::Low => "Low",
        StringId::Save => "Save",
        StringId::Cancel => "Cancel",
        StringId::Update => "Update",
        StringId::Loading => "Loading...",
        StringId::RainExpected => "Rain expected",
        StringId::TotalYield => "Total Yield",
        StringId::Factors => "Factors",
        StringId::Weather => "Weather",
        StringId::Soil => "Soil",
        StringId::Practices => "Practices",
        StringId::FillAllFields => "Please fill in all fields",
        StringId::Notifications => "Notifications",
        StringId::WeatherAlerts => "Weather Alerts",
        StringId::IrrigationReminders => "Irrigation Reminders",
        StringId::PestControlAlerts => "Pest Control Alerts",
        StringId::HarvestPredictions => "Harvest Predictions",
        StringId::SettingsSaved => "Settings saved successfully!",
        StringId::UnsavedChanges => "Unsaved changes",
        StringId::ChangesDiscarded => "Changes discarded",
    }
}

fn spanish(id: StringId) -> &'static str {
    match id {
        StringId::Dashboard => "Panel de Control",
        StringId::Prediction => "Predicción de Cultivos",
        StringId::Recommendations => "Recomendaciones",
        StringId::Monitoring => "Monitoreo de Datos",
        StringId::Analysis => "Análisis Histórico",
        StringId::Settings => "Configuraciones",
        StringId::WelcomeBack => "Bienvenido de vuelta",
        StringId::FarmOverview => "Resumen de la Granja",
        StringId::CurrentConditions => "Condiciones Actuales",
        StringId::QuickStats => "Estadísticas Rápidas",
        StringId::RecentPredictions => "Predicciones Recientes",
        StringId::UrgentRecommendations => "Recomendaciones Urgentes",
        StringId::Temperature => "Temperatura",
        StringId::Humidity => "Humedad",
        StringId::Rainfall => "Precipitación",
        StringId::WindSpeed => "Velocidad del Viento",
        StringId::WeatherForecast => "Pronóstico del Tiempo",
        StringId::SoilMoisture => "Humedad del Suelo",
        StringId::PhLevel => "Nivel de pH",
        StringId::Nitrogen => "Nitrógeno",
        StringId::Phosphorus => "Fósforo",
        StringId::Potassium => "Potasio",
        StringId::OrganicMatter => "Materia Orgánica",
        StringId::PredictYield => "Predecir Rendimiento de Cultivos",
        StringId::SelectCrop => "Seleccionar Cultivo",
        StringId::PlantingDate => "Fecha de Siembra",
        StringId::FieldSize => "Tamaño del Campo (acres)",
        StringId::PredictButton => "Generar Predicción",
        StringId::PredictionResults => "Resultados de Predicción",
        StringId::ExpectedYield => "Rendimiento Esperado",
        StringId::Confidence => "Confianza",
        StringId::IrrigationAdvice => "Consejos de Riego",
        StringId::FertilizationPlan => "Plan de Fertilización",
        StringId::PestControlAlert => "Alerta de Control de Plagas",
        StringId::GeneralTips => "Consejos Generales",
        StringId::Acres => "acres",
        StringId::Tons => "toneladas",
        StringId::High => "Alto",
        StringId::Medium => "Medio",
        StringId::Low => "Bajo",
        StringId::Save => "Guardar",
        StringId::Cancel => "Cancelar",
        StringId::Update => "Actualizar",
        StringId::Loading => "Cargando...",
        StringId::RainExpected => "Lluvia prevista",
        StringId::TotalYield => "Rendimiento Total",
        StringId::Factors => "Factores",
        StringId::Weather => "Clima",
        StringId::Soil => "Suelo",
        StringId::Practices => "Prácticas",
        StringId::FillAllFields => "Por favor complete todos los campos",
        StringId::Notifications => "Notificaciones",
        StringId::WeatherAlerts => "Alertas Meteorológicas",
        StringId::IrrigationReminders => "Recordatorios de Riego",
        StringId::PestControlAlerts => "Alertas de Control de Plagas",
        StringId::HarvestPredictions => "Predicciones de Cosecha",
        StringId::SettingsSaved => "¡Configuración guardada con éxito!",
        StringId::UnsavedChanges => "Cambios sin guardar",
        StringId::ChangesDiscarded => "Cambios descartados",
    }
}

fn hindi(id: StringId) -> &'static str {
    match id {
        StringId::Dashboard => "डैशबोर्ड",
        StringId::Prediction => "फसल भविष्यवाणी",
        StringId::Recommendations => "सिफारिशें",
        StringId::Monitoring => "डेटा निगरानी",
        StringId::Analysis => "ऐतिहासिक विश्लेषण",
        StringId::Settings => "सेटिंग्स",
        StringId::WelcomeBack => "वापसी पर स्वागत है",
        StringId::FarmOverview => "फार्म अवलोकन",
        StringId::CurrentConditions => "वर्तमान स्थितियां",
        StringId::QuickStats => "त्वरित आंकड़े",
        StringId::RecentPredictions => "हाल की भविष्यवाणियां",
        StringId::UrgentRecommendations => "तत्काल सिफारिशें",
        StringId::Temperature => "तापमान",
        StringId::Humidity => "नमी",
        StringId::Rainfall => "वर्षा",
        StringId::WindSpeed => "हवा की गति",
        StringId::WeatherForecast => "मौसम पूर्वानुमान",
        StringId::SoilMoisture => "मिट्टी की नमी",
        StringId::PhLevel => "पीएच स्तर",
        StringId::Nitrogen => "नाइट्रोजन",
        StringId::Phosphorus => "फास्फोरस",
        StringId::Potassium => "पोटेशियम",
        StringId::OrganicMatter => "जैविक पदार्थ",
        StringId::PredictYield => "फसल उत्पादन की भविष्यवाणी",
        StringId::SelectCrop => "फसल चुनें",
        StringId::PlantingDate => "रोपण तिथि",
        StringId::FieldSize => "खेत का आकार (एकड़)",
        StringId::PredictButton => "भविष्यवाणी उत्पन्न करें",
        StringId::PredictionResults => "भविष्यवाणी परिणाम",
        StringId::ExpectedYield => "अपेक्षित उत्पादन",
        StringId::Confidence => "विश्वास",
        StringId::IrrigationAdvice => "सिंचाई सलाह",
        StringId::FertilizationPlan => "उर्वरीकरण योजना",
        StringId::PestControlAlert => "कीट नियंत्रण चेतावनी",
        StringId::GeneralTips => "सामान्य सुझाव",
        StringId::Acres => "एकड़",
        StringId::Tons => "टन",
        StringId::High => "उच्च",
        StringId::Medium => "मध्यम",
        StringId::Low => "कम",
        StringId::Save => "सेव करें",
        StringId::Cancel => "रद्द करें",
        StringId::Update => "अपडेट करें",
        StringId::Loading => "लोड हो रहा है...",
        StringId::RainExpected => "बारिश की संभावना",
        StringId::TotalYield => "कुल उत्पादन",
        StringId::Factors => "कारक",
        StringId::Weather => "मौसम",
        StringId::Soil => "मिट्टी",
        StringId::Practices => "कृषि पद्धतियां",
        StringId::FillAllFields => "कृपया सभी फ़ील्ड भरें",
        StringId::Notifications => "सूचनाएं",
        StringId::WeatherAlerts => "मौसम चेतावनियां",
        StringId::IrrigationReminders => "सिंचाई अनुस्मारक",
        StringId::PestControlAlerts => "कीट नियंत्रण चेतावनियां",
        StringId::HarvestPredictions => "फसल कटाई भविष्यवाणियां",
        StringId::SettingsSaved => "सेटिंग्स सफलतापूर्वक सेव हुईं!",
        StringId::UnsavedChanges => "असहेजे बदलाव",
        StringId::ChangesDiscarded => "बदलाव रद्द किए गए",
    }
}

/// Identifiers with an empty entry in any locale. Used by `fieldops check`.
pub fn missing_translations() -> Vec<(Language, StringId)> {
    Language::ALL
        .iter()
        .flat_map(|lang| StringId::ALL.iter().map(move |id| (*lang, *id)))
        .filter(|(lang, id)| text(*lang, *id).trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_defines_every_string() {
        assert!(missing_translations().is_empty());
    }

    #[test]
    fn lookups_by_language() {
        assert_eq!(text(Language::English, StringId::Dashboard), "Dashboard");
        assert_eq!(text(Language::Spanish, StringId::Dashboard), "Panel de Control");
        assert_eq!(text(Language::Hindi, StringId::Tons), "टन");
        assert_eq!(text(Language::Spanish, StringId::Loading), "Cargando...");
    }

    #[test]
    fn locales_differ_where_expected() {
        let differing = StringId::ALL
            .iter()
            .filter(|id| text(Language::English, **id) != text(Language::Spanish, **id))
            .count();
        // "acres" is shared between English and Spanish
        assert_eq!(differing, StringId::ALL.len() - 1);
    }

    #[test]
    fn all_lists_each_string_once() {
        let unique: std::collections::HashSet<_> = StringId::ALL.iter().collect();
        assert_eq!(unique.len(), StringId::ALL.len());
        assert_eq!(StringId::ALL.first(), Some(&StringId::Dashboard));
        assert_eq!(StringId::ALL.last(), Some(&StringId::Loading));
        assert!(StringId::ALL.contains(&StringId::HarvestPredictions));
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("FR"), None);
    }

    #[test]
    fn language_cycles() {
        assert_eq!(Language::English.next(), Language::Spanish);
        assert_eq!(Language::Hindi.next(), Language::English);
    }

    #[test]
    fn language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Hindi).unwrap(), "\"hi\"");
        let lang: Language = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(lang, Language::Spanish);
    }
}
