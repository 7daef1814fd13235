use super::calculations::{percent_change, round1};
use crate::models::{HistoricalYearRecord, ImprovementHighlight, YieldTrend};

/// Farm yield history in tons/acre, oldest first.
pub const YIELD_HISTORY: [HistoricalYearRecord; 5] = [
    HistoricalYearRecord {
        year: "2020",
        wheat: 3.8,
        corn: 8.1,
        soybeans: 2.9,
        total: 14.8,
    },
    HistoricalYearRecord {
        year: "2021",
        wheat: 4.1,
        corn: 8.5,
        soybeans: 3.2,
        total: 15.8,
    },
    HistoricalYearRecord {
        year: "2022",
        wheat: 3.9,
        corn: 8.3,
        soybeans: 3.0,
        total: 15.2,
    },
    HistoricalYearRecord {
        year: "2023",
        wheat: 4.3,
        corn: 8.9,
        soybeans: 3.4,
        total: 16.6,
    },
    HistoricalYearRecord {
        year: "2024",
        wheat: 4.5,
        corn: 9.2,
        soybeans: 3.6,
        total: 17.3,
    },
];

pub const IMPROVEMENTS: [ImprovementHighlight; 4] = [
    ImprovementHighlight {
        category: "Overall Yield",
        improvement_percent: 17,
        period_years: 5,
    },
    ImprovementHighlight {
        category: "Water Efficiency",
        improvement_percent: 23,
        period_years: 3,
    },
    ImprovementHighlight {
        category: "Fertilizer Optimization",
        improvement_percent: 15,
        period_years: 2,
    },
    ImprovementHighlight {
        category: "Pest Management",
        improvement_percent: 28,
        period_years: 4,
    },
];

/// Growing-season mean temperature (°C) per year, aligned with `YIELD_HISTORY`.
pub const SEASON_TEMPERATURE_C: [f64; 5] = [20.5, 21.2, 21.8, 22.1, 22.4];

/// Annual rainfall (mm) per year, aligned with `YIELD_HISTORY`.
pub const ANNUAL_RAINFALL_MM: [f64; 5] = [850.0, 780.0, 920.0, 810.0, 875.0];

/// Read-only view over a year-ordered yield table.
#[derive(Debug, Clone, Copy)]
pub struct HistoricalAggregator {
    records: &'static [HistoricalYearRecord],
}

impl HistoricalAggregator {
    pub fn new() -> Self {
        Self::with_records(&YIELD_HISTORY)
    }

    /// `records` must be non-empty and ordered oldest first.
    pub fn with_records(records: &'static [HistoricalYearRecord]) -> Self {
        debug_assert!(!records.is_empty(), "history table must not be empty");
        Self { records }
    }

    pub fn records(&self) -> &'static [HistoricalYearRecord] {
        self.records
    }

    /// Year keys newest first, as the year selector lists them.
    pub fn years(&self) -> Vec<&'static str> {
        self.records.iter().rev().map(|r| r.year).collect()
    }

    /// Record for `year`, or the first record in the table when the year is unknown.
    pub fn year_record(&self, year: &str) -> &'static HistoricalYearRecord {
        let records = self.records;
        records
            .iter()
            .find(|r| r.year == year)
            .unwrap_or(&records[0])
    }

    /// Year-over-year change in total yield against the preceding record.
    pub fn yoy_change(&self, year: &str) -> YieldTrend {
        let idx = match self.records.iter().position(|r| r.year == year) {
            Some(idx) if idx > 0 => idx,
            _ => return YieldTrend::flat(),
        };

        let previous = &self.records[idx - 1];
        let current = &self.records[idx];

        match percent_change(previous.total, current.total) {
            Some(change) => YieldTrend {
                change_percent: round1(change),
                is_positive: change > 0.0,
            },
            None => YieldTrend::flat(),
        }
    }

    /// Largest combined yield, used to scale the chart.
    pub fn max_total(&self) -> f64 {
        self.records
            .iter()
            .map(|r| r.total)
            .fold(0.0, f64::max)
    }

    pub fn improvements(&self) -> &'static [ImprovementHighlight] {
        &IMPROVEMENTS
    }
}

impl Default for HistoricalAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_record_lookup() {
        let agg = HistoricalAggregator::new();
        let r = agg.year_record("2023");
        assert_eq!(r.year, "2023");
        assert_eq!(r.total, 16.6);
    }

    #[test]
    fn unknown_year_falls_back_to_first_record() {
        let agg = HistoricalAggregator::new();
        assert_eq!(agg.year_record("1999").year, "2020");
        assert_eq!(agg.year_record("").year, "2020");
    }

    #[test]
    fn yoy_change_2021() {
        let trend = HistoricalAggregator::new().yoy_change("2021");
        assert_eq!(trend.change_percent, 6.8);
        assert!(trend.is_positive);
    }

    #[test]
    fn yoy_change_decline() {
        let trend = HistoricalAggregator::new().yoy_change("2022");
        assert_eq!(trend.change_percent, -3.8);
        assert!(!trend.is_positive);
    }

    #[test]
    fn yoy_change_for_remaining_years() {
        let agg = HistoricalAggregator::new();
        assert_eq!(agg.yoy_change("2023").change_percent, 9.2);
        assert_eq!(agg.yoy_change("2024").change_percent, 4.2);
    }

    #[test]
    fn yoy_change_earliest_or_unknown_is_flat() {
        let agg = HistoricalAggregator::new();
        assert_eq!(agg.yoy_change("2020"), YieldTrend::flat());
        assert_eq!(agg.yoy_change("1999"), YieldTrend::flat());
    }

    #[test]
    fn years_newest_first() {
        assert_eq!(
            HistoricalAggregator::new().years(),
            vec!["2024", "2023", "2022", "2021", "2020"]
        );
    }

    #[test]
    fn max_total_is_latest_year() {
        assert_eq!(HistoricalAggregator::new().max_total(), 17.3);
    }

    #[test]
    fn climate_series_align_with_records() {
        assert_eq!(SEASON_TEMPERATURE_C.len(), YIELD_HISTORY.len());
        assert_eq!(ANNUAL_RAINFALL_MM.len(), YIELD_HISTORY.len());
    }
}
