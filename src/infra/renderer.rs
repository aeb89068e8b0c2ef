// ============================================================
// Layer 6 — Chart Renderers
// ============================================================
// Two ChartRenderer backends:
//
//   TextRenderer — horizontal ASCII bars, handy in a terminal
//
//       Probability of each phoneme coming after /K AE1/
//       T      | ######################################## 0.6667
//       B      | #################### 0.3333
//                                             (x: Phoneme)
//
//   JsonRenderer — one JSON document per chart, for notebooks
//                  or any plotting tool that reads JSON
//
// Values are truncated, not rounded, when printed.

use anyhow::Result;
use std::io::Write;

use crate::analysis::chart::BarChart;
use crate::domain::traits::ChartRenderer;
use crate::infra::metrics::truncate;

const DEFAULT_WIDTH: usize = 40;
const VALUE_DIGITS: u32 = 4;

/// Draws charts as ASCII bars on any writer.
pub struct TextRenderer<W: Write> {
    out:   W,
    width: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, width: DEFAULT_WIDTH }
    }

    /// Width in characters of the longest bar
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartRenderer for TextRenderer<W> {
    fn render(&mut self, chart: &BarChart) -> Result<()> {
        writeln!(self.out, "{}", chart.title)?;
        if let Some(y_label) = &chart.y_label {
            writeln!(self.out, "({y_label})")?;
        }

        let label_width = chart.labels().map(str::len).max().unwrap_or(0);
        let max_value   = chart.max_value();

        for bar in &chart.bars {
            let filled = if max_value > 0.0 {
                ((bar.value / max_value) * self.width as f64).round() as usize
            } else {
                0
            };
            writeln!(
                self.out,
                "{:<label_width$} | {} {}",
                bar.label,
                "#".repeat(filled),
                truncate(bar.value, VALUE_DIGITS),
            )?;
        }
        writeln!(self.out, "(x: {})", chart.x_label)?;
        Ok(())
    }
}

/// Writes each chart as a single line of JSON.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartRenderer for JsonRenderer<W> {
    fn render(&mut self, chart: &BarChart) -> Result<()> {
        serde_json::to_writer(&mut self.out, chart)?;
        writeln!(self.out)?;
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> BarChart {
        BarChart::new("Title", "Phoneme")
            .with_y_label("P")
            .with_bars([("T", 0.666666), ("AE1", 0.333333)])
    }

    #[test]
    fn test_text_renderer_scales_bars() {
        let mut renderer = TextRenderer::new(Vec::new()).with_width(10);
        renderer.render(&chart()).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Title");
        assert_eq!(lines[1], "(P)");
        assert_eq!(lines[2], "T   | ########## 0.6666");
        assert_eq!(lines[3], "AE1 | ##### 0.3333");
        assert_eq!(lines[4], "(x: Phoneme)");
    }

    #[test]
    fn test_json_renderer_one_line_per_chart() {
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render(&chart()).unwrap();
        renderer.render(&chart()).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();

        let charts: Vec<BarChart> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(charts, vec![chart(), chart()]);
    }
}
