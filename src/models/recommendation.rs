use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationKind {
    Irrigation,
    Fertilization,
    PestControl,
    General,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::Irrigation => "Irrigation",
            RecommendationKind::Fertilization => "Fertilization",
            RecommendationKind::PestControl => "Pest Control",
            RecommendationKind::General => "General",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            RecommendationKind::Irrigation => Color::Blue,
            RecommendationKind::Fertilization => Color::Green,
            RecommendationKind::PestControl => Color::Red,
            RecommendationKind::General => Color::Gray,
        }
    }
}

impl std::fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Priority::Low => Color::Blue,
            Priority::Medium => Color::Yellow,
            Priority::High => Color::Red,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Priority::Low => "→",
            Priority::Medium => "⚠",
            Priority::High => "!",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: String,
}

impl DataPoint {
    pub fn new(label: &str, value: impl std::fmt::Display) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action: String,
    pub timing: String,
    pub data_points: Vec<DataPoint>,
}

impl Recommendation {
    pub fn new(
        id: impl Into<String>,
        kind: RecommendationKind,
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            priority,
            title: title.into(),
            description: description.into(),
            action: String::new(),
            timing: String::new(),
            data_points: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn with_timing(mut self, timing: impl Into<String>) -> Self {
        self.timing = timing.into();
        self
    }

    pub fn with_data_point(mut self, label: &str, value: impl std::fmt::Display) -> Self {
        self.data_points.push(DataPoint::new(label, value));
        self
    }
}

/// Per-priority tally shown above the recommendation list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

impl PriorityCounts {
    pub fn tally(recommendations: &[Recommendation]) -> Self {
        recommendations
            .iter()
            .fold(Self::default(), |mut counts, rec| {
                match rec.priority {
                    Priority::High => counts.high += 1,
                    Priority::Medium => counts.medium += 1,
                    Priority::Low => counts.low += 1,
                }
                counts.total += 1;
                counts
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(priority: Priority) -> Recommendation {
        Recommendation::new(
            "test",
            RecommendationKind::General,
            priority,
            "Title",
            "Description",
        )
    }

    #[test]
    fn builder_sets_fields() {
        let r = rec(Priority::High)
            .with_action("Do something")
            .with_timing("Now")
            .with_data_point("Moisture", "35%");
        assert_eq!(r.action, "Do something");
        assert_eq!(r.timing, "Now");
        assert_eq!(r.data_points, vec![DataPoint::new("Moisture", "35%")]);
    }

    #[test]
    fn priority_ordering() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn tally_counts_each_priority() {
        let recs = vec![
            rec(Priority::High),
            rec(Priority::Medium),
            rec(Priority::High),
            rec(Priority::Low),
        ];
        let counts = PriorityCounts::tally(&recs);
        assert_eq!(counts.high, 2);
        assert_eq!(counts.medium, 1);
        assert_eq!(counts.low, 1);
        assert_eq!(counts.total, 4);
        assert_eq!(PriorityCounts::tally(&[]), PriorityCounts::default());
    }

    #[test]
    fn kind_serializes_in_camel_case() {
        let json = serde_json::to_string(&RecommendationKind::PestControl).unwrap();
        assert_eq!(json, "\"pestControl\"");
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");
    }
}
