use crate::config::Config;
use crate::error::{FieldOpsError, Result};
use crate::i18n::{self, Language, StringId};
use crate::logic::yield_estimator::{self, DEFAULT_BASE_YIELD};
use crate::logic::{HistoricalAggregator, RulesEngine, TelemetryStore};
use crate::models::{
    Crop, HistoricalYearRecord, NotificationKind, PriorityCounts, Recommendation,
    YieldPrediction, YieldTrend,
};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Serialize)]
pub struct PredictionReport {
    pub planting_date: NaiveDate,
    pub field_size_acres: f64,
    pub prediction: YieldPrediction,
    pub total_yield_tons: f64,
}

#[derive(Debug, Serialize)]
pub struct RecommendationReport {
    pub counts: PriorityCounts,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
pub struct HistoryReport {
    pub record: HistoricalYearRecord,
    pub trend: YieldTrend,
}

/// RNG for a one-off command: explicit seed, then the configured seed, then entropy.
pub fn command_rng(seed: Option<u64>, config: &Config) -> StdRng {
    match seed.or(config.telemetry.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

pub fn predict(
    crop: &str,
    planting_date: &str,
    field_size: f64,
    rng: &mut StdRng,
) -> Result<PredictionReport> {
    let crop = crop.trim();
    if crop.is_empty() {
        return Err(FieldOpsError::InvalidData("crop must not be empty".into()));
    }
    let planting_date = NaiveDate::parse_from_str(planting_date.trim(), "%Y-%m-%d")
        .map_err(|_| {
            FieldOpsError::InvalidData(format!(
                "'{}' is not a date (expected YYYY-MM-DD)",
                planting_date
            ))
        })?;
    if !field_size.is_finite() || field_size <= 0.0 {
        return Err(FieldOpsError::InvalidData(format!(
            "field size must be positive, got {}",
            field_size
        )));
    }
    if Crop::from_str(crop).is_none() {
        tracing::warn!(
            crop,
            base_yield = DEFAULT_BASE_YIELD,
            "Unknown crop, using default base yield"
        );
    }

    let store = TelemetryStore::default();
    let prediction = yield_estimator::estimate_yield(crop, store.weather(), store.soil(), rng);
    let total_yield_tons = prediction.total_yield(field_size);

    Ok(PredictionReport {
        planting_date,
        field_size_acres: field_size,
        prediction,
        total_yield_tons,
    })
}

/// Recommendations for the seed readings, optionally from a single rule.
pub fn recommend(rule: Option<&str>) -> Result<RecommendationReport> {
    let store = TelemetryStore::default();
    let engine = RulesEngine::new();
    let recommendations = match rule {
        Some(id) => {
            if !engine.list_rules().iter().any(|(rule_id, _)| *rule_id == id) {
                return Err(FieldOpsError::InvalidData(format!("unknown rule '{}'", id)));
            }
            engine
                .evaluate_rule(id, store.weather(), store.soil())
                .into_iter()
                .collect()
        }
        None => engine.evaluate(store.weather(), store.soil()),
    };
    Ok(RecommendationReport {
        counts: PriorityCounts::tally(&recommendations),
        recommendations,
    })
}

pub fn history(year: Option<&str>) -> HistoryReport {
    let aggregator = HistoricalAggregator::new();
    let year = year.unwrap_or_else(|| aggregator.years().first().copied().unwrap_or_default());
    HistoryReport {
        record: *aggregator.year_record(year),
        trend: aggregator.yoy_change(year),
    }
}

pub fn to_json<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn format_prediction(report: &PredictionReport, lang: Language) -> String {
    let t = |id| i18n::text(lang, id);
    let p = &report.prediction;
    let mut out = String::new();

    let _ = writeln!(out, "{} - {}", t(StringId::PredictionResults), p.crop);
    let _ = writeln!(out, "  {}: {}", t(StringId::PlantingDate), report.planting_date);
    let _ = writeln!(out, "  {}: {}", t(StringId::FieldSize), report.field_size_acres);
    let _ = writeln!(
        out,
        "  {}: {:.1} {}/{}",
        t(StringId::ExpectedYield),
        p.expected_yield,
        t(StringId::Tons),
        t(StringId::Acres)
    );
    let _ = writeln!(
        out,
        "  {}: {:.0} {}",
        t(StringId::TotalYield),
        report.total_yield_tons,
        t(StringId::Tons)
    );
    let _ = writeln!(out, "  {}: {}%", t(StringId::Confidence), p.confidence);
    let _ = writeln!(
        out,
        "  {}: {} {}% | {} {}% | {} {}%",
        t(StringId::Factors),
        t(StringId::Weather),
        p.factors.weather,
        t(StringId::Soil),
        p.factors.soil,
        t(StringId::Practices),
        p.factors.practices
    );
    out
}

pub fn format_recommendations(report: &RecommendationReport, lang: Language) -> String {
    let t = |id| i18n::text(lang, id);
    let c = report.counts;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}: {} {} | {} {} | {} {}",
        t(StringId::Recommendations),
        c.high,
        t(StringId::High),
        c.medium,
        t(StringId::Medium),
        c.low,
        t(StringId::Low)
    );
    for rec in &report.recommendations {
        let _ = writeln!(
            out,
            "{} [{}] {} ({})",
            rec.priority.symbol(),
            rec.priority.as_str(),
            rec.title,
            rec.kind.as_str()
        );
        let _ = writeln!(out, "    {}", rec.description);
        if !rec.action.is_empty() {
            let _ = writeln!(out, "    Action: {} ({})", rec.action, rec.timing);
        }
        for dp in &rec.data_points {
            let _ = writeln!(out, "    {}: {}", dp.label, dp.value);
        }
    }
    out
}

pub fn format_history(report: &HistoryReport) -> String {
    let r = &report.record;
    let mut out = String::new();
    let _ = writeln!(out, "{} ({} YoY)", r.year, report.trend.label());
    let _ = writeln!(out, "  Wheat:    {:.1} t/acre", r.wheat);
    let _ = writeln!(out, "  Corn:     {:.1} t/acre", r.corn);
    let _ = writeln!(out, "  Soybeans: {:.1} t/acre", r.soybeans);
    let _ = writeln!(out, "  Total:    {:.1} t/acre", r.total);
    out
}

/// Summary printed by `fieldops check`. Errors when the config or locale tables have problems.
pub fn check(config: &Config) -> Result<String> {
    let mut problems = config.validate();
    for (lang, id) in i18n::missing_translations() {
        problems.push(format!("missing {} translation for {:?}", lang.code(), id));
    }

    if !problems.is_empty() {
        return Err(FieldOpsError::Config(problems.join("; ")));
    }

    let profile = config.farm.to_profile();
    let mut out = String::new();
    let _ = writeln!(out, "Farm:        {} ({})", profile.name, profile.location);
    let _ = writeln!(out, "Size:        {} acres", profile.size_acres);
    let _ = writeln!(out, "Crops:       {}", profile.crop_list());
    let _ = writeln!(
        out,
        "Telemetry:   every {}s{}",
        config.telemetry.tick_interval().as_secs(),
        config
            .telemetry
            .seed
            .map(|s| format!(", seed {}", s))
            .unwrap_or_default()
    );
    let _ = writeln!(out, "Prediction:  {}ms delay", config.prediction.delay_ms);
    let _ = writeln!(
        out,
        "Display:     {} / {}",
        config.display.language.native_name(),
        config.display.temperature_unit.symbol()
    );
    let alerts = NotificationKind::ALL
        .iter()
        .filter(|kind| config.notifications.is_enabled(**kind))
        .count();
    let _ = writeln!(
        out,
        "Alerts:      {} of {} enabled",
        alerts,
        NotificationKind::ALL.len()
    );
    let _ = writeln!(
        out,
        "Rules:       {}",
        RulesEngine::new()
            .list_rules()
            .iter()
            .map(|(id, _)| *id)
            .collect::<Vec<_>>()
            .join(", ")
    );
    out.push_str("OK\n");
    Ok(out)
}
