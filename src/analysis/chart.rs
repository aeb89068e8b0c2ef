// ============================================================
// Layer 5 — Bar Chart Value Object
// ============================================================

use serde::{Deserialize, Serialize};

/// One labelled bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// A complete bar chart: everything a renderer needs, nothing more.
/// Bars are drawn in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title:   String,
    pub x_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    pub bars:    Vec<Bar>,
}

impl BarChart {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>) -> Self {
        Self {
            title:   title.into(),
            x_label: x_label.into(),
            y_label: None,
            bars:    Vec::new(),
        }
    }

    pub fn with_y_label(mut self, y_label: impl Into<String>) -> Self {
        self.y_label = Some(y_label.into());
        self
    }

    pub fn with_bars<I, S>(mut self, bars: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        self.bars = bars
            .into_iter()
            .map(|(label, value)| Bar { label: label.into(), value })
            .collect();
        self
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.bars.iter().map(|b| b.label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.bars.iter().map(|b| b.value)
    }

    /// Largest bar value, or 0 for an empty chart
    pub fn max_value(&self) -> f64 {
        self.values().fold(0.0, f64::max)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let chart = BarChart::new("t", "x")
            .with_y_label("y")
            .with_bars([("a", 0.25), ("b", 0.5)]);
        assert_eq!(chart.labels().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(chart.max_value(), 0.5);
        assert_eq!(chart.y_label.as_deref(), Some("y"));
    }

    #[test]
    fn test_json_omits_missing_y_label() {
        let chart = BarChart::new("t", "x").with_bars([("a", 1.0)]);
        let json  = serde_json::to_string(&chart).unwrap();
        assert!(!json.contains("y_label"));
        let back: BarChart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chart);
    }
}
