use super::farm_profile::Crop;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoricalYearRecord {
    pub year: &'static str,
    pub wheat: f64,
    pub corn: f64,
    pub soybeans: f64,
    pub total: f64,
}

impl HistoricalYearRecord {
    /// Yield under the given filter; `All` is the farm-wide total.
    pub fn yield_for(&self, filter: CropFilter) -> f64 {
        match filter {
            CropFilter::All => self.total,
            CropFilter::Only(Crop::Wheat) => self.wheat,
            CropFilter::Only(Crop::Corn) => self.corn,
            CropFilter::Only(Crop::Soybeans) => self.soybeans,
            CropFilter::Only(_) => 0.0,
        }
    }
}

/// Crop selection for the analysis view. Only crops tracked in the history table are offered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CropFilter {
    #[default]
    All,
    Only(Crop),
}

impl CropFilter {
    pub const OPTIONS: [CropFilter; 4] = [
        CropFilter::All,
        CropFilter::Only(Crop::Wheat),
        CropFilter::Only(Crop::Corn),
        CropFilter::Only(Crop::Soybeans),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CropFilter::All => "All Crops",
            CropFilter::Only(crop) => crop.as_str(),
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::OPTIONS.iter().position(|f| f == self).unwrap_or(0);
        Self::OPTIONS[(idx + 1) % Self::OPTIONS.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YieldTrend {
    pub change_percent: f64,
    pub is_positive: bool,
}

impl YieldTrend {
    pub fn flat() -> Self {
        Self {
            change_percent: 0.0,
            is_positive: true,
        }
    }

    pub fn label(&self) -> String {
        if self.is_positive {
            format!("+{:.1}%", self.change_percent)
        } else {
            format!("{:.1}%", self.change_percent)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImprovementHighlight {
    pub category: &'static str,
    pub improvement_percent: u32,
    pub period_years: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: HistoricalYearRecord = HistoricalYearRecord {
        year: "2023",
        wheat: 4.3,
        corn: 8.9,
        soybeans: 3.4,
        total: 16.6,
    };

    #[test]
    fn yield_for_filter() {
        assert_eq!(RECORD.yield_for(CropFilter::All), 16.6);
        assert_eq!(RECORD.yield_for(CropFilter::Only(Crop::Corn)), 8.9);
        assert_eq!(RECORD.yield_for(CropFilter::Only(Crop::Rice)), 0.0);
    }

    #[test]
    fn filter_cycles_through_options() {
        let mut f = CropFilter::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(f.label());
            f = f.next();
        }
        assert_eq!(seen, vec!["All Crops", "Wheat", "Corn", "Soybeans"]);
        assert_eq!(f, CropFilter::All);
    }

    #[test]
    fn trend_label_sign() {
        let up = YieldTrend {
            change_percent: 6.8,
            is_positive: true,
        };
        let down = YieldTrend {
            change_percent: -3.8,
            is_positive: false,
        };
        assert_eq!(up.label(), "+6.8%");
        assert_eq!(down.label(), "-3.8%");
        assert_eq!(YieldTrend::flat().label(), "+0.0%");
    }
}
